pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod collection;
    }
}

pub mod modules {
    pub mod planner {
        pub mod core {
            pub mod event;
            pub mod location;
            pub mod participant;
            pub mod relations;
            pub mod user;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod use_cases {
            pub mod browse_planner {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod manage_users {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod create_event {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod create_location {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod create_participant {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod entity_store;
                pub mod entity_store_in_memory;
                pub mod seed;
            }
        }
    }
}

pub mod shell;
