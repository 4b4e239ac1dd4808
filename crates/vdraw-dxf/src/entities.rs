//! DXF 实体编码
//!
//! 支持的实体：
//! - 线段 (LINE)
//! - 轻量多段线 (LWPOLYLINE)
//! - 单行文本 (TEXT)
//!
//! 每个实体的 `create()` 先清空缓冲，再按固定顺序输出完整组码序列。
//! 组码顺序是格式约定的一部分，改变顺序会破坏部分读取器的兼容性。

use crate::version::AcadVer;
use crate::writer::CodeWriter;
use vdraw_path::math::{Point2, Vector3, EPSILON};

/// LINE 实体
#[derive(Debug, Clone)]
pub struct DxfLine {
    pub id: u64,
    pub layer: String,
    pub color: i32,
    pub thickness: f64,
    pub start: Point2,
    pub end: Point2,
    pub extrusion: Vector3,
    writer: CodeWriter,
}

impl DxfLine {
    pub fn new(version: AcadVer, id: u64) -> Self {
        Self {
            id,
            layer: "0".to_string(),
            color: 256, // ByLayer
            thickness: 0.0,
            start: Point2::new(0.0, 0.0),
            end: Point2::new(0.0, 0.0),
            extrusion: Vector3::new(0.0, 0.0, 1.0),
            writer: CodeWriter::new(version),
        }
    }

    /// 输出实体的完整组码序列
    pub fn create(&mut self) -> String {
        self.writer.reset();
        self.writer
            .add(0, "LINE")
            .handle(self.id)
            .subclass("AcDbEntity")
            .add(8, &self.layer)
            .add(62, self.color)
            .subclass("AcDbLine")
            .add(39, self.thickness)
            .point2(10, self.start)
            .point2(11, self.end)
            .extrusion(self.extrusion);
        self.writer.build()
    }
}

/// LWPOLYLINE 顶点
///
/// 凸度 (bulge) = tan(圆心角/4)，非零时顶点到下一顶点之间为弧段；
/// 这是该格式在缺少弧段原语时表示圆弧的方式。
#[derive(Debug, Clone, Copy)]
pub struct LwPolylineVertex {
    pub point: Point2,
    pub start_width: f64,
    pub end_width: f64,
    pub bulge: f64,
}

impl LwPolylineVertex {
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            start_width: 0.0,
            end_width: 0.0,
            bulge: 0.0,
        }
    }

    pub fn with_bulge(point: Point2, bulge: f64) -> Self {
        Self {
            point,
            start_width: 0.0,
            end_width: 0.0,
            bulge,
        }
    }
}

/// LWPOLYLINE 实体
#[derive(Debug, Clone)]
pub struct DxfLwPolyline {
    pub id: u64,
    pub layer: String,
    pub color: i32,
    /// 多段线标志（位 0 = 闭合）
    pub flags: i32,
    pub constant_width: f64,
    pub elevation: f64,
    pub thickness: f64,
    pub vertices: Vec<LwPolylineVertex>,
    writer: CodeWriter,
}

impl DxfLwPolyline {
    pub fn new(version: AcadVer, id: u64) -> Self {
        Self {
            id,
            layer: "0".to_string(),
            color: 256,
            flags: 0,
            constant_width: 0.0,
            elevation: 0.0,
            thickness: 0.0,
            vertices: Vec::new(),
            writer: CodeWriter::new(version),
        }
    }

    /// 输出实体的完整组码序列
    pub fn create(&mut self) -> String {
        self.writer.reset();
        self.writer
            .add(0, "LWPOLYLINE")
            .handle(self.id)
            .subclass("AcDbEntity")
            .add(8, &self.layer)
            .add(62, self.color)
            .subclass("AcDbPolyline")
            .add(90, self.vertices.len())
            .add(70, self.flags)
            .add(43, self.constant_width)
            .add(38, self.elevation)
            .add(39, self.thickness);

        let emit_widths = self.constant_width.abs() < EPSILON;
        for vertex in &self.vertices {
            self.writer
                .add(10, vertex.point.x)
                .add(20, vertex.point.y);
            // 顶点宽度仅在常量宽度为零时输出
            if emit_widths {
                self.writer
                    .add(40, vertex.start_width)
                    .add(41, vertex.end_width);
            }
            self.writer.add(42, vertex.bulge);
        }
        self.writer.build()
    }
}

/// TEXT 实体
#[derive(Debug, Clone)]
pub struct DxfText {
    pub id: u64,
    pub layer: String,
    pub color: i32,
    pub thickness: f64,
    /// 第一对齐点
    pub first_alignment: Point2,
    pub height: f64,
    pub text: String,
    /// 旋转角度（度）
    pub rotation: f64,
    /// X 方向缩放
    pub x_scale: f64,
    /// 倾斜角度（度）
    pub oblique: f64,
    pub style: String,
    /// 文本生成标志（2 = 反向，4 = 倒置）
    pub generation_flags: i32,
    pub horizontal_justification: i32,
    pub vertical_justification: i32,
    /// 第二对齐点
    pub second_alignment: Point2,
    pub extrusion: Vector3,
    writer: CodeWriter,
}

impl DxfText {
    pub fn new(version: AcadVer, id: u64) -> Self {
        Self {
            id,
            layer: "0".to_string(),
            color: 256,
            thickness: 0.0,
            first_alignment: Point2::new(0.0, 0.0),
            height: 1.0,
            text: String::new(),
            rotation: 0.0,
            x_scale: 1.0,
            oblique: 0.0,
            style: "Standard".to_string(),
            generation_flags: 0,
            horizontal_justification: 0,
            vertical_justification: 0,
            second_alignment: Point2::new(0.0, 0.0),
            extrusion: Vector3::new(0.0, 0.0, 1.0),
            writer: CodeWriter::new(version),
        }
    }

    /// 输出实体的完整组码序列
    pub fn create(&mut self) -> String {
        self.writer.reset();
        self.writer
            .add(0, "TEXT")
            .handle(self.id)
            .subclass("AcDbEntity")
            .add(39, self.thickness)
            .add(8, &self.layer)
            .add(62, self.color)
            .subclass("AcDbText")
            .point2(10, self.first_alignment)
            .add(40, self.height)
            .add(1, &self.text)
            .add(50, self.rotation)
            .add(41, self.x_scale)
            .add(51, self.oblique)
            .add(7, &self.style)
            .add(71, self.generation_flags)
            .add(72, self.horizontal_justification)
            .point2(11, self.second_alignment)
            .extrusion(self.extrusion);

        // 格式怪癖：AcDbText 子类标记在垂直对齐码之前重复出现一次，
        // 既有读取器依赖该字节序列，不能合并
        self.writer.subclass("AcDbText");
        if self.writer.version().versioned() {
            self.writer.add(73, self.vertical_justification);
        }
        self.writer.build()
    }
}
