pub mod admin;
pub mod admin_users;
pub mod analysis;
pub mod favorites;
pub mod login;
pub mod movie_detail;
pub mod movie_list;
pub mod not_found;
pub mod profile;
pub mod register;
