//! VDraw 路径几何内核
//!
//! 与后端无关的矢量路径表示及其转换：
//! - `geometry`: 路径几何模型（图形、路径段、填充规则）
//! - `builder`: 有序的几何构建协议
//! - `markup`: SVG/XAML 路径标记序列化
//! - `convert`: 面向抽象路径构建能力的转换（含二次→三次升阶）
//!
//! # 示例
//!
//! ```rust
//! use vdraw_path::prelude::*;
//!
//! let mut builder = GeometryBuilder::new(FillRule::NonZero);
//! builder.begin_figure(Point2::new(0.0, 0.0), true, true);
//! builder.line_to(Point2::new(10.0, 0.0), true, true).unwrap();
//!
//! let geometry = builder.finish();
//! assert_eq!(geometry_markup(&geometry, MarkupFlavor::Svg), "M0,0L10,0z");
//! ```

pub mod builder;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod markup;
pub mod math;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::builder::GeometryBuilder;
    pub use crate::convert::{elevate_quadratic, emit_figure, emit_geometry, PathSink};
    pub use crate::error::PathError;
    pub use crate::geometry::{
        FillRule, PathFigure, PathGeometry, PathSegment, PathSize, SegmentKind, SweepDirection,
    };
    pub use crate::markup::{figure_markup, geometry_markup, segment_markup, MarkupFlavor};
    pub use crate::math::{BoundingBox2, Point2, Point3, Vector2, Vector3, EPSILON};
}
