pub mod chat_server;
