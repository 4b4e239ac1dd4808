//! VDraw DXF 编码器
//!
//! 将图形实体与表记录序列化为 DXF ASCII 组码文本：
//! - `writer`: 组码-值对缓冲写入器
//! - `version`: AutoCAD 版本与新旧方言门控
//! - `entities`: LINE / LWPOLYLINE / TEXT 实体
//! - `tables`: LTYPE / DIMSTYLE / UCS 表记录
//!
//! 输出可被标准 DXF 读取器解析；文件组装（段结构、保存）由上层负责。

pub mod entities;
pub mod tables;
pub mod version;
pub mod writer;

pub use entities::{DxfLine, DxfLwPolyline, DxfText, LwPolylineVertex};
pub use tables::{DxfDimstyle, DxfLtype, DxfUcs};
pub use version::AcadVer;
pub use writer::CodeWriter;
