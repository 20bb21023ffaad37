pub mod daily;
pub mod health;
pub mod pages;
pub mod profile;

#[cfg(test)]
mod tests;
