//! DXF 表记录编码
//!
//! 支持的表记录：
//! - 线型 (LTYPE)
//! - 标注样式 (DIMSTYLE)
//! - 用户坐标系 (UCS)
//!
//! 每种记录提供 `defaults()` 初始化标准字段，`create()` 输出组码序列。
//! DIMSTYLE 的句柄使用组码 105 而非 5。

use crate::version::AcadVer;
use crate::writer::CodeWriter;
use vdraw_path::math::{Point3, Vector3};

/// LTYPE 线型表记录
#[derive(Debug, Clone)]
pub struct DxfLtype {
    pub id: u64,
    pub name: String,
    /// 标准标志（组码 70）
    pub flags: i32,
    pub description: String,
    pub dash_lengths: Vec<f64>,
    writer: CodeWriter,
}

impl DxfLtype {
    pub fn new(version: AcadVer, id: u64) -> Self {
        Self {
            id,
            name: String::new(),
            flags: 0,
            description: String::new(),
            dash_lengths: Vec::new(),
            writer: CodeWriter::new(version),
        }
    }

    /// 标准连续线型
    pub fn defaults(&mut self) {
        self.name = "Continuous".to_string();
        self.flags = 0;
        self.description = "Solid line".to_string();
        self.dash_lengths.clear();
    }

    /// 输出表记录的完整组码序列
    pub fn create(&mut self) -> String {
        let total: f64 = self.dash_lengths.iter().map(|d| d.abs()).sum();
        self.writer.reset();
        self.writer
            .add(0, "LTYPE")
            .handle(self.id)
            .subclass("AcDbSymbolTableRecord")
            .subclass("AcDbLinetypeTableRecord")
            .add(2, &self.name)
            .add(70, self.flags)
            .add(3, &self.description)
            .add(72, 65) // 对齐码固定为 'A'
            .add(73, self.dash_lengths.len())
            .add(40, total);
        for dash in &self.dash_lengths {
            self.writer.add(49, dash);
        }
        self.writer.build()
    }
}

/// DIMSTYLE 标注样式表记录
#[derive(Debug, Clone)]
pub struct DxfDimstyle {
    pub id: u64,
    pub name: String,
    pub flags: i32,
    /// 全局标注比例 (DIMSCALE)
    pub dim_scale: f64,
    /// 箭头大小 (DIMASZ)
    pub arrow_size: f64,
    /// 尺寸界线偏移 (DIMEXO)
    pub extension_offset: f64,
    /// 尺寸界线超出量 (DIMEXE)
    pub extension_extend: f64,
    /// 标注文字高度 (DIMTXT)
    pub text_height: f64,
    /// 文字与标注线间距 (DIMGAP)
    pub text_gap: f64,
    writer: CodeWriter,
}

impl DxfDimstyle {
    pub fn new(version: AcadVer, id: u64) -> Self {
        Self {
            id,
            name: String::new(),
            flags: 0,
            dim_scale: 1.0,
            arrow_size: 2.5,
            extension_offset: 0.625,
            extension_extend: 1.25,
            text_height: 2.5,
            text_gap: 0.625,
            writer: CodeWriter::new(version),
        }
    }

    /// 标准标注样式
    pub fn defaults(&mut self) {
        self.name = "Standard".to_string();
        self.flags = 0;
        self.dim_scale = 1.0;
        self.arrow_size = 2.5;
        self.extension_offset = 0.625;
        self.extension_extend = 1.25;
        self.text_height = 2.5;
        self.text_gap = 0.625;
    }

    /// 输出表记录的完整组码序列
    pub fn create(&mut self) -> String {
        self.writer.reset();
        self.writer
            .add(0, "DIMSTYLE")
            .handle_code(105, self.id) // DIMSTYLE 专用句柄组码
            .subclass("AcDbSymbolTableRecord")
            .subclass("AcDbDimStyleTableRecord")
            .add(2, &self.name)
            .add(70, self.flags)
            .add(40, self.dim_scale)
            .add(41, self.arrow_size)
            .add(42, self.extension_offset)
            .add(44, self.extension_extend)
            .add(140, self.text_height)
            .add(147, self.text_gap);
        self.writer.build()
    }
}

/// UCS 用户坐标系表记录
#[derive(Debug, Clone)]
pub struct DxfUcs {
    pub id: u64,
    pub name: String,
    pub flags: i32,
    pub origin: Point3,
    pub x_axis: Vector3,
    pub y_axis: Vector3,
    /// 正交视图类型（组码 79，0 = 非正交）
    pub orthographic_view_type: i32,
    pub elevation: f64,
    /// 正交 UCS 类型序列（组码 71）
    pub orthographic_type: Option<Vec<i32>>,
    /// 正交 UCS 原点序列（组码 13/23/33）
    pub orthographic_origin: Option<Vec<Point3>>,
    writer: CodeWriter,
}

impl DxfUcs {
    pub fn new(version: AcadVer, id: u64) -> Self {
        Self {
            id,
            name: String::new(),
            flags: 0,
            origin: Point3::new(0.0, 0.0, 0.0),
            x_axis: Vector3::new(1.0, 0.0, 0.0),
            y_axis: Vector3::new(0.0, 1.0, 0.0),
            orthographic_view_type: 0,
            elevation: 0.0,
            orthographic_type: None,
            orthographic_origin: None,
            writer: CodeWriter::new(version),
        }
    }

    /// 世界坐标系
    pub fn defaults(&mut self) {
        self.name = "World".to_string();
        self.flags = 0;
        self.origin = Point3::new(0.0, 0.0, 0.0);
        self.x_axis = Vector3::new(1.0, 0.0, 0.0);
        self.y_axis = Vector3::new(0.0, 1.0, 0.0);
        self.orthographic_view_type = 0;
        self.elevation = 0.0;
        self.orthographic_type = None;
        self.orthographic_origin = None;
    }

    /// 输出表记录的完整组码序列
    pub fn create(&mut self) -> String {
        self.writer.reset();
        self.writer
            .add(0, "UCS")
            .handle(self.id)
            .subclass("AcDbSymbolTableRecord")
            .subclass("AcDbUCSTableRecord")
            .add(2, &self.name)
            .add(70, self.flags)
            .point3(10, self.origin)
            .add(11, self.x_axis.x)
            .add(21, self.x_axis.y)
            .add(31, self.x_axis.z)
            .add(12, self.y_axis.x)
            .add(22, self.y_axis.y)
            .add(32, self.y_axis.z)
            .add(79, self.orthographic_view_type)
            .add(146, self.elevation);

        match (&self.orthographic_type, &self.orthographic_origin) {
            (Some(types), Some(origins)) if types.len() == origins.len() => {
                for (ortho_type, ortho_origin) in types.iter().zip(origins) {
                    self.writer.add(71, ortho_type).point3(13, *ortho_origin);
                }
            }
            (Some(types), Some(origins)) => {
                // 格式怪癖：长度不一致时整块跳过而非报错，
                // 保持与旧版输出的字节级兼容，仅在日志中暴露缺陷
                tracing::warn!(
                    types = types.len(),
                    origins = origins.len(),
                    "UCS orthographic arrays length mismatch, block skipped"
                );
            }
            _ => {}
        }
        self.writer.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::tests::codes;

    #[test]
    fn test_ltype_defaults_and_dashes() {
        let mut ltype = DxfLtype::new(AcadVer::AC1015, 0x10);
        ltype.defaults();
        let output = ltype.create();
        assert!(output.contains("Continuous"));
        assert!(!codes(&output).contains(&49));

        ltype.name = "Dashed".to_string();
        ltype.dash_lengths = vec![2.0, -1.0];
        let output = ltype.create();
        let all = codes(&output);
        assert_eq!(all.iter().filter(|c| **c == 49).count(), 2);
        // 总模式长度为绝对值之和
        let lines: Vec<&str> = output.lines().collect();
        let pos = lines.iter().position(|l| l.trim() == "40").unwrap();
        assert_eq!(lines[pos + 1], "3");
    }

    #[test]
    fn test_dimstyle_uses_handle_code_105() {
        let mut dimstyle = DxfDimstyle::new(AcadVer::AC1015, 0x20);
        dimstyle.defaults();
        let output = dimstyle.create();
        let all = codes(&output);
        assert!(all.contains(&105));
        assert!(!all.contains(&5));

        let mut legacy = DxfDimstyle::new(AcadVer::AC1009, 0x20);
        legacy.defaults();
        let all = codes(&legacy.create());
        assert!(!all.contains(&105));
    }

    #[test]
    fn test_ucs_orthographic_block() {
        let mut ucs = DxfUcs::new(AcadVer::AC1015, 0x30);
        ucs.defaults();
        ucs.orthographic_type = Some(vec![1, 2]);
        ucs.orthographic_origin = Some(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ]);

        let output = ucs.create();
        let all = codes(&output);
        assert_eq!(all.iter().filter(|c| **c == 71).count(), 2);
        assert_eq!(all.iter().filter(|c| **c == 13).count(), 2);
        assert_eq!(all.iter().filter(|c| **c == 33).count(), 2);
    }

    #[test]
    fn test_ucs_mismatched_arrays_skip_block() {
        let mut ucs = DxfUcs::new(AcadVer::AC1015, 0x30);
        ucs.defaults();
        ucs.orthographic_type = Some(vec![1, 2, 3]);
        ucs.orthographic_origin = Some(vec![Point3::new(0.0, 0.0, 0.0)]);

        let output = ucs.create();
        let all = codes(&output);
        assert!(!all.contains(&71));
        assert!(!all.contains(&13));
    }

    #[test]
    fn test_ucs_absent_arrays_skip_block() {
        let mut ucs = DxfUcs::new(AcadVer::AC1015, 0x30);
        ucs.defaults();
        let all = codes(&ucs.create());
        assert!(!all.contains(&71));
    }
}
