pub mod modules {
    pub mod scheduling {
        pub mod core {
            pub mod appointment;
            pub mod day_period;
            pub mod day_window;
            pub mod overlap;
            pub mod partition;
            pub mod ports;
            pub mod services;
            pub mod time_slot;
        }
        pub mod use_cases {
            pub mod list_available_slots {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_available_days {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod book_appointment {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod cancel_appointment {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_upcoming_appointments {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_services {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod google_calendar;
                pub mod in_memory_calendar;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod booking_flow_tests;
    }
}
