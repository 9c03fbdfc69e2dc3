//! Prompt text sent to the model.
//!
//! Every variant carries [`LANGUAGE_POLICY`]; it is not configurable per call.

use crate::domain::placeholders::PlaceholderSet;

pub const LANGUAGE_POLICY: &str = "Viết ngắn gọn, dễ hiểu, đúng tiếng Việt.";

/// Why a single field is being requested on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPromptKind {
    /// The batch answer parsed but left this field out.
    Backfill,
    /// The batch answer had no usable structure at all.
    Fallback,
}

/// One request covering every placeholder, asking for a JSON object.
pub fn batch_prompt(instruction: &str, placeholders: &PlaceholderSet) -> String {
    format!(
        "Bạn là trợ lý giúp điền form. Dựa vào yêu cầu:\n\
         \n\
         \"{instruction}\"\n\
         \n\
         Tạo nội dung cho các trường sau trong form.\n\
         Trả về một đối tượng JSON, mỗi khóa là tên trường, mỗi giá trị là nội dung dạng chuỗi.\n\
         {LANGUAGE_POLICY}\n\
         \n\
         Các trường cần điền: {fields}\n",
        instruction = instruction.trim(),
        fields = placeholders,
    )
}

/// One request for a single field, answered with plain content only.
pub fn field_prompt(instruction: &str, field: &str, kind: FieldPromptKind) -> String {
    let opening = match kind {
        FieldPromptKind::Backfill => "Theo yêu cầu:",
        FieldPromptKind::Fallback => "Giúp điền form. Theo yêu cầu:",
    };

    format!(
        "{opening}\n\
         \n\
         \"{instruction}\"\n\
         \n\
         Viết nội dung cho trường \"{field}\".\n\
         {LANGUAGE_POLICY}\n\
         Chỉ trả về nội dung, không giải thích thêm.\n",
        instruction = instruction.trim(),
    )
}
