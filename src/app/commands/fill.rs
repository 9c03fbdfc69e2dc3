//! Interactive fill run.
//!
//! `Start → Discovered → Confirmed → Generated → Approved → Rendered → Finished`,
//! with an exit at every gate. Errors abort the run; the two clean exits are
//! reported through [`FillExit`].

use std::path::PathBuf;

use chrono::Local;

use crate::app::AppContext;
use crate::app::commands::generate::GenerationEvent;
use crate::app::commands::{discover, generate, render};
use crate::app::console::Console;
use crate::domain::credential::resolve_from_env;
use crate::domain::{
    API_KEY_ENV, AppError, Credential, Discovery, FieldMapping, GenerationOutcome, PlaceholderSet,
};
use crate::ports::{DocumentTemplate, Prompter, TextModel, TextModelFactory};

pub const EXAMPLE_INSTRUCTION: &str =
    "Viết đơn xin nghỉ 3 ngày từ 15/7-17/7 cho Nguyễn Văn A vì việc riêng";

/// Answers supplied up front; anything left `None` is asked interactively.
#[derive(Debug, Clone)]
pub struct FillOptions {
    pub template: Option<PathBuf>,
    pub instruction: Option<String>,
    pub api_key: Option<String>,
    /// Approve the generated content and skip the follow-up question.
    pub assume_yes: bool,
    /// Environment variable consulted when no key is given.
    pub api_key_env: String,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            template: None,
            instruction: None,
            api_key: None,
            assume_yes: false,
            api_key_env: API_KEY_ENV.to_string(),
        }
    }
}

/// Clean ways a run ends without writing a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillExit {
    NoVariables,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    Rendered { output: PathBuf, edit_requested: bool },
    Exited(FillExit),
}

enum Stage {
    Start,
    Discovered {
        template: PathBuf,
        placeholders: PlaceholderSet,
    },
    Confirmed {
        template: PathBuf,
        placeholders: PlaceholderSet,
        model: Box<dyn TextModel>,
        instruction: String,
    },
    Generated {
        template: PathBuf,
        outcome: GenerationOutcome,
    },
    Approved {
        template: PathBuf,
        mapping: FieldMapping,
    },
    Rendered {
        output: PathBuf,
    },
    Finished(FillOutcome),
}

pub fn execute<T, P, F>(
    ctx: &AppContext<T, P, F>,
    options: &FillOptions,
) -> Result<FillOutcome, AppError>
where
    T: DocumentTemplate,
    P: Prompter,
    F: TextModelFactory,
{
    let console = ctx.console();
    let mut stage = Stage::Start;

    loop {
        stage = match stage {
            Stage::Start => {
                console.header();
                let template = template_path(ctx.prompter(), options)?;
                console.info(&format!("🔍 Đang tìm biến trong file: {}", template.display()));

                match discover::execute(&template, ctx.templates())? {
                    Discovery::NoVariables => {
                        console.warn("Hình như file này không có biến nào...");
                        console.hint("🔔 Check lại xem có phải file mẫu không nhé?");
                        Stage::Finished(FillOutcome::Exited(FillExit::NoVariables))
                    }
                    Discovery::Found(placeholders) => {
                        console.success(&format!("Tìm được {} biến rồi!", placeholders.len()));
                        console.placeholders(&placeholders);
                        Stage::Discovered { template, placeholders }
                    }
                }
            }
            Stage::Discovered { template, placeholders } => {
                let credential = credential(ctx.prompter(), options)?;
                let model = ctx.models().connect(&credential)?;
                let instruction = instruction(ctx.prompter(), console, options)?;
                Stage::Confirmed { template, placeholders, model, instruction }
            }
            Stage::Confirmed { template, placeholders, model, instruction } => {
                console.info("\n⏳ Đang nhờ Gemini viết nội dung...");
                let outcome =
                    generate::execute(model.as_ref(), &instruction, &placeholders, |event| {
                        report(console, event)
                    })?;
                Stage::Generated { template, outcome }
            }
            Stage::Generated { template, outcome } => {
                console.mapping(&outcome.mapping);
                for failure in &outcome.failures {
                    console.warn(&format!(
                        "Trường {} chưa tạo được: {}",
                        failure.field, failure.message
                    ));
                }

                let approved =
                    options.assume_yes || ctx.prompter().confirm("Điền form luôn nhé?")?;
                if approved {
                    Stage::Approved { template, mapping: outcome.mapping }
                } else {
                    console.hint("🔔 Ok, không điền.");
                    Stage::Finished(FillOutcome::Exited(FillExit::Declined))
                }
            }
            Stage::Approved { template, mapping } => {
                let output = render::execute(
                    &template,
                    &mapping,
                    Local::now().naive_local(),
                    ctx.templates(),
                )?;
                console.success(&format!("Xong rồi! File mới: {}", output.display()));
                Stage::Rendered { output }
            }
            Stage::Rendered { output } => {
                let edit_requested =
                    !options.assume_yes && ctx.prompter().confirm("Muốn sửa lại không?")?;
                if edit_requested {
                    console.info("Chạy lại chương trình và sửa yêu cầu nhé!");
                }
                Stage::Finished(FillOutcome::Rendered { output, edit_requested })
            }
            Stage::Finished(outcome) => return Ok(outcome),
        };
    }
}

fn template_path(prompter: &impl Prompter, options: &FillOptions) -> Result<PathBuf, AppError> {
    let raw = match &options.template {
        Some(path) => path.display().to_string(),
        None => prompter.input("Nhập tên file Word (VD: mau_don.docx)")?,
    };

    // Paths dragged into a terminal arrive quoted.
    let trimmed = raw.trim().trim_matches(|c| c == '"' || c == '\'');
    if trimmed.is_empty() {
        return Err(AppError::MissingInput("template file name".to_string()));
    }
    Ok(PathBuf::from(trimmed))
}

fn credential(prompter: &impl Prompter, options: &FillOptions) -> Result<Credential, AppError> {
    let typed = match &options.api_key {
        Some(key) => key.clone(),
        None => prompter.secret(&format!(
            "Nhập API key Gemini (hoặc Enter để dùng {})",
            options.api_key_env
        ))?,
    };

    let (credential, source) = resolve_from_env(Some(typed.as_str()), &options.api_key_env)?;
    tracing::debug!(?source, "credential resolved");
    Ok(credential)
}

fn instruction(
    prompter: &impl Prompter,
    console: &Console,
    options: &FillOptions,
) -> Result<String, AppError> {
    let raw = match &options.instruction {
        Some(text) => text.clone(),
        None => {
            console.info("\n📝 Nhập yêu cầu để AI viết nội dung:");
            console.hint(&format!("VD: {}", EXAMPLE_INSTRUCTION));
            prompter.input("Yêu cầu của bạn")?
        }
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::MissingInput("instruction".to_string()));
    }
    Ok(trimmed.to_string())
}

fn report(console: &Console, event: GenerationEvent<'_>) {
    match event {
        GenerationEvent::BatchRequested { .. } => {}
        GenerationEvent::Backfilling { missing } => {
            console.warn(&format!("Còn thiếu {} trường. Đang lấy thêm...", missing.len()));
        }
        GenerationEvent::FallingBack => {
            console.warn("Không thấy JSON. Thử cách khác vậy...");
            console.info("⏳ Đang tạo nội dung từng phần...");
        }
        GenerationEvent::FieldRequested { field } => {
            println!("  Đang viết cho phần: {}...", field);
        }
        GenerationEvent::FieldFailed { field, error } => {
            console.error(&format!("Lỗi phần {}: {}", field, error));
        }
    }
}
