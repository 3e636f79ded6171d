pub mod creators;
pub mod health;
pub mod onboarding;
pub mod pages;
pub mod posts;
pub mod seo;
pub mod webhooks;
