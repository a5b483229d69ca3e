pub mod error_message;
pub mod forgot_password;
pub mod input_field;
