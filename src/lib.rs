pub mod shared {
    pub mod infrastructure {
        pub mod attendance_ledger;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod action;
            pub mod config;
            pub mod event;
            pub mod evolve;
            pub mod state;
            pub mod window;
        }
        pub mod use_cases {
            pub mod resolve_schedule {
                pub mod error;
                pub mod resolve;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod clock_attendance {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
