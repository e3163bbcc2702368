mod admission;
mod alumni;
mod bus_route;
mod event;
mod fee;
mod library;
mod notice;
mod student;
