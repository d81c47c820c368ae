pub mod chat_api_remote;
pub mod requester;
pub mod settings;
