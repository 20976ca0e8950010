pub mod catalog;
pub mod chatbot;
pub mod scheduling;
pub mod validator;
pub mod wizard;
