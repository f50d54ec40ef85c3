pub mod authentication_service;
pub mod token_service;

pub use authentication_service::AuthenticationService;
pub use token_service::TokenService;
