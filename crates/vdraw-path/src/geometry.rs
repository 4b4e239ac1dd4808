//! 路径几何模型定义
//!
//! 支持的路径段类型：
//! - 直线 (Line)
//! - 三次贝塞尔 (CubicBezier)
//! - 二次贝塞尔 (QuadraticBezier)
//! - 椭圆弧 (Arc)
//! - 折线 (PolyLine)
//! - 三次贝塞尔序列 (PolyCubicBezier)
//! - 二次贝塞尔序列 (PolyQuadraticBezier)
//!
//! 几何对象通过 [`crate::builder::GeometryBuilder`] 构建，
//! 构建完成后作为只读数据被序列化器/转换器/编码器消费。

use crate::error::PathError;
use crate::math::{BoundingBox2, Point2};
use serde::{Deserialize, Serialize};

/// 路径段尺寸（椭圆弧半径对）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PathSize {
    pub width: f64,
    pub height: f64,
}

impl PathSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// 椭圆弧扫掠方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SweepDirection {
    /// 顺时针（默认）
    #[default]
    Clockwise,
    /// 逆时针
    CounterClockwise,
}

/// 填充规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FillRule {
    /// 非零环绕数（默认）
    #[default]
    NonZero,
    /// 奇偶规则
    EvenOdd,
}

/// 路径段几何数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SegmentKind {
    Line {
        point: Point2,
    },
    /// p1、p2 为控制点，p3 为终点
    CubicBezier {
        p1: Point2,
        p2: Point2,
        p3: Point2,
    },
    /// p1 为控制点，p2 为终点
    QuadraticBezier {
        p1: Point2,
        p2: Point2,
    },
    Arc {
        point: Point2,
        size: PathSize,
        /// 旋转角度（度）
        rotation_angle: f64,
        is_large_arc: bool,
        sweep: SweepDirection,
    },
    PolyLine {
        points: Vec<Point2>,
    },
    /// 点数应为 3 的正整数倍（每三点一段三次曲线）
    PolyCubicBezier {
        points: Vec<Point2>,
    },
    /// 点数应为 2 的正整数倍（每两点一段二次曲线）
    PolyQuadraticBezier {
        points: Vec<Point2>,
    },
}

impl SegmentKind {
    /// 获取段的类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            SegmentKind::Line { .. } => "Line",
            SegmentKind::CubicBezier { .. } => "CubicBezier",
            SegmentKind::QuadraticBezier { .. } => "QuadraticBezier",
            SegmentKind::Arc { .. } => "Arc",
            SegmentKind::PolyLine { .. } => "PolyLine",
            SegmentKind::PolyCubicBezier { .. } => "PolyCubicBezier",
            SegmentKind::PolyQuadraticBezier { .. } => "PolyQuadraticBezier",
        }
    }

    /// 获取段的全部控制点/端点
    pub fn points(&self) -> Vec<Point2> {
        match self {
            SegmentKind::Line { point } => vec![*point],
            SegmentKind::CubicBezier { p1, p2, p3 } => vec![*p1, *p2, *p3],
            SegmentKind::QuadraticBezier { p1, p2 } => vec![*p1, *p2],
            SegmentKind::Arc { point, .. } => vec![*point],
            SegmentKind::PolyLine { points }
            | SegmentKind::PolyCubicBezier { points }
            | SegmentKind::PolyQuadraticBezier { points } => points.clone(),
        }
    }

    /// 校验序列段的点数步长
    ///
    /// PolyCubicBezier 要求 3 的正整数倍，PolyQuadraticBezier 要求 2 的
    /// 正整数倍。其余段类型无步长约束。
    pub fn validate(&self) -> Result<(), PathError> {
        let (count, stride) = match self {
            SegmentKind::PolyCubicBezier { points } => (points.len(), 3),
            SegmentKind::PolyQuadraticBezier { points } => (points.len(), 2),
            _ => return Ok(()),
        };
        if count == 0 || count % stride != 0 {
            return Err(PathError::MalformedPolySegment {
                kind: self.type_name(),
                count,
                stride,
            });
        }
        Ok(())
    }
}

/// 路径段
///
/// `is_stroked` 和 `is_smooth_join` 是描边样式提示，不参与几何计算。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub is_stroked: bool,
    pub is_smooth_join: bool,
    pub kind: SegmentKind,
}

impl PathSegment {
    pub fn new(kind: SegmentKind, is_stroked: bool, is_smooth_join: bool) -> Self {
        Self {
            is_stroked,
            is_smooth_join,
            kind,
        }
    }

    pub fn points(&self) -> Vec<Point2> {
        self.kind.points()
    }
}

/// 路径图形（一条子路径）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathFigure {
    pub start_point: Point2,
    pub segments: Vec<PathSegment>,
    pub is_filled: bool,
    pub is_closed: bool,
}

impl PathFigure {
    pub fn new(start_point: Point2, is_filled: bool, is_closed: bool) -> Self {
        Self {
            start_point,
            segments: Vec::new(),
            is_filled,
            is_closed,
        }
    }

    /// 包围盒（基于起点和全部控制点的凸包近似）
    pub fn bounding_box(&self) -> BoundingBox2 {
        let mut bbox = BoundingBox2::from_points([self.start_point]);
        for segment in &self.segments {
            for point in segment.points() {
                bbox.expand_to_include(&point);
            }
        }
        bbox
    }
}

impl Default for PathFigure {
    fn default() -> Self {
        Self::new(Point2::new(0.0, 0.0), true, true)
    }
}

/// 路径几何（图形集合）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PathGeometry {
    pub figures: Vec<PathFigure>,
    pub fill_rule: FillRule,
}

impl PathGeometry {
    pub fn new(fill_rule: FillRule) -> Self {
        Self {
            figures: Vec::new(),
            fill_rule,
        }
    }

    /// 包围盒（基于全部控制点的凸包近似）
    pub fn bounding_box(&self) -> BoundingBox2 {
        if self.figures.is_empty() {
            return BoundingBox2::empty();
        }
        let mut bbox = BoundingBox2::empty();
        for figure in &self.figures {
            let fb = figure.bounding_box();
            bbox.expand_to_include(&fb.min);
            bbox.expand_to_include(&fb.max);
        }
        bbox
    }
}
