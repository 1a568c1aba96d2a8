pub mod slugs;
pub mod titles;
