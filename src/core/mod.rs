//! Core building blocks: conversion parameters, resampling, and the
//! load/normalize/emit pipeline. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;
