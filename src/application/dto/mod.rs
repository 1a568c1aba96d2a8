pub mod slugs;
pub mod titles;

pub use slugs::{SlugPatch, SlugResolutionDto};
pub use titles::{MigrationPlanDto, TitleMutationDto, TitlePatchDto, TitleSetDto, TypeStatsDto};
