pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod primitives;
        pub mod qr_payload;
    }
    pub mod infrastructure {
        pub mod config;
        pub mod notifier;
        pub mod store;
    }
}

pub mod modules {
    pub mod students {
        pub mod core {
            pub mod student;
        }
        pub mod use_cases {
            pub mod register_student {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_student {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_student {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_students {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod student_qr_payload {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod repository;
            }
        }
    }
    pub mod events {
        pub mod core {
            pub mod event;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod repository;
            }
        }
    }
    pub mod attendance {
        pub mod core {
            pub mod confirmation;
            pub mod outcome;
            pub mod record;
            pub mod state;
        }
        pub mod use_cases {
            pub mod scan_attendance {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod override_status {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_attendees {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod send_confirmation {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod repository;
            }
        }
    }
    pub mod reports {
        pub mod core {
            pub mod report;
            pub mod stats;
        }
        pub mod use_cases {
            pub mod attendance_report {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod dashboard {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
