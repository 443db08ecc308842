pub mod user_account;

pub use user_account::{hash_password, NewUserAccount, UserAccount};
