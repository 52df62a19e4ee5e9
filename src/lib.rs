pub mod modules {
    pub mod timesheets {
        pub mod core {
            pub mod access;
            pub mod entry;
            pub mod filters;
            pub mod stats;
            pub mod validation;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod use_cases {
            pub mod submit_timesheet {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_timesheets {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_timesheet {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_timesheet {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod review_timesheet {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod timesheet_stats {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod entry_store;
                pub mod entry_store_in_memory;
                pub mod entry_store_postgres;
            }
        }
    }
}

pub mod shell;
