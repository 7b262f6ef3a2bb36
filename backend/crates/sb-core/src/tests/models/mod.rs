mod schedule;
mod user;
