pub mod shared {
    pub mod config;
    pub mod infrastructure {
        pub mod document_store;
    }
}

pub mod modules {
    pub mod notes {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod note;
            pub mod placeholder;
            pub mod sort_order;
            pub mod state;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod envelopes;
            pub mod create_note {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_note {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_note {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_notes {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod query;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod note_repository;
                pub mod notes_api;
                pub mod notes_api_http;
                pub mod notes_api_in_memory;
            }
        }
        pub mod controller;
        pub mod session;
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod notes_http_tests;
    }
}
