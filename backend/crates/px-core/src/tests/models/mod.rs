mod refresh_token;
mod user;
mod user_role;
