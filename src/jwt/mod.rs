pub mod builder;
pub mod claims;
pub mod header;
pub mod serializer;
pub mod signer;
pub mod token;
pub mod verifier;

pub use builder::TokenIssuer;
pub use claims::Claims;
pub use header::Header;
pub use signer::{HmacSigner, TokenSigner};
pub use token::Token;
pub use verifier::TokenVerifier;
