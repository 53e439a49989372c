pub mod account_deleted;
