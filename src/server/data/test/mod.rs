mod favorite;
mod people;
mod planet;
mod user;
