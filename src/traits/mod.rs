pub mod chat_api;
