// Copyright @yucwang 2026

pub mod constant_medium;
