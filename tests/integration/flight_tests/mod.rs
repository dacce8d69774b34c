mod basic;
mod controls;
mod gear;
mod ground;
