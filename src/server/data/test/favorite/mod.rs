use crate::server::{
    data::favorite::FavoriteRepository,
    error::{internal::InternalError, AppError},
    model::favorite::{CreateFavoriteParam, FavoriteTarget},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_user_and_people;
mod find_by_user_and_planet;
mod get_by_user;
