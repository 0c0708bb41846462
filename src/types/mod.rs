pub mod counts;
pub mod record;
pub mod score;
