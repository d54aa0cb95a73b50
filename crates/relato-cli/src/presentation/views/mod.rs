mod auth;
mod feed;
mod profile;
mod report;
