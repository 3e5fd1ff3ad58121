//! Whitted Renderer - recursive CPU ray tracing
//!
//! One primary ray per pixel, Blinn-Phong shading with hard shadows,
//! and mirror reflections followed to a fixed depth.
//!
//! Pipeline: `Sampler` yields samples, `Camera` turns them into rays,
//! `Tracer` resolves them against the scene, and `Film` stores the colors
//! until they are finalized into an 8-bit `Raster`.

mod bucket;
mod camera;
mod color;
mod error;
mod film;
mod light;
mod material;
mod primitive;
mod renderer;
mod sampler;
mod scene;
mod shape;
mod sphere;
mod square;
mod tracer;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use color::Color;
pub use error::{RenderError, RenderResult};
pub use film::{channel_to_u8, Film, Raster, Rgb8};
pub use light::{DirectionalLight, Light, PointLight};
pub use material::{Brdf, ConstantMaterial, Material};
pub use primitive::{AggregatePrimitive, GeometricPrimitive, Intersection, Primitive};
pub use renderer::{render, render_parallel, render_sample, CancelToken, RenderSettings};
pub use sampler::{Sample, SampleIter, Sampler};
pub use scene::Scene;
pub use shape::{Shape, ShapeHit};
pub use sphere::Sphere;
pub use square::Square;
pub use tracer::{reflect_ray, Tracer, DEFAULT_MAX_DEPTH, DEFAULT_SHININESS};
pub use triangle::Triangle;

/// Re-export the geometry kernel types used in this crate's API
pub use whitted_math::{Interval, LocalGeo, Point3, Ray, Transformation, UnitNormal, Vector3};
