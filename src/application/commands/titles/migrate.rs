// src/application/commands/titles/migrate.rs
use super::TitleMigrationService;
use crate::{
    application::{
        dto::{MigrationPlanDto, TitleMutationDto, TypeStatsDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        document::{DocumentType, Title},
        portable_text::{Block, BlockChild, BlockStyle, ContentNode, Span},
        schema,
    },
};

/// Plans the conversion of plain-string titles to single-block rich
/// text for the named document types.
pub struct MigrateTitlesCommand {
    pub document_types: Vec<String>,
}

impl TitleMigrationService {
    /// Scans the requested types and produces one `set` mutation per
    /// document whose title is still a plain string. Documents with
    /// rich-text titles are left alone, which makes the plan idempotent;
    /// titles of unsupported shape are counted and skipped rather than
    /// failing the batch.
    pub async fn plan(&self, command: MigrateTitlesCommand) -> ApplicationResult<MigrationPlanDto> {
        if command.document_types.is_empty() {
            return Err(ApplicationError::validation(
                "at least one document type is required",
            ));
        }

        let mut mutations = Vec::new();
        let mut stats = Vec::new();

        for name in &command.document_types {
            if schema::find(name).is_none() {
                return Err(ApplicationError::not_found(format!(
                    "unknown document type: {name}"
                )));
            }
            let doc_type = DocumentType::new(name.clone())?;
            let documents = self.source.documents_of_type(&doc_type).await?;

            let mut counters = TypeStatsDto {
                doc_type: name.clone(),
                scanned: documents.len(),
                planned: 0,
                already_rich: 0,
                missing_title: 0,
                unsupported: 0,
            };

            for document in &documents {
                match document.title.as_ref() {
                    None => counters.missing_title += 1,
                    Some(Title::RichText(_)) => counters.already_rich += 1,
                    Some(Title::Unsupported(_)) => {
                        counters.unsupported += 1;
                        tracing::warn!(id = %document.id, "skipping title with unsupported shape");
                    }
                    Some(Title::PlainText(text)) => {
                        mutations
                            .push(TitleMutationDto::new(document.id.as_str(), self.rich_title(text)));
                        counters.planned += 1;
                    }
                }
            }

            tracing::info!(
                %doc_type,
                scanned = counters.scanned,
                planned = counters.planned,
                "planned title migration"
            );
            stats.push(counters);
        }

        Ok(MigrationPlanDto {
            generated_at: self.clock.now(),
            mutations,
            stats,
        })
    }

    /// One normal block holding one unmarked span with the plain text.
    fn rich_title(&self, text: &str) -> Vec<ContentNode> {
        let block_key = self.keys.generate("block");
        let span = Span {
            key: Some(self.keys.generate("span")),
            text: text.to_owned(),
            marks: Vec::new(),
        };
        vec![ContentNode::Block(Block {
            key: Some(block_key),
            style: BlockStyle::Normal,
            mark_defs: Vec::new(),
            children: vec![BlockChild::Span(span)],
            list_item: None,
            level: None,
        })]
    }
}
