use crate::server::data::bus_route::BusRouteRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, bus_route::BusRouteFactory},
};

mod get_all;
mod update_location;
