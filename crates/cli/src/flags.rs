use clap::ValueEnum;
use ennea_classifier::StageKind;
use ennea_taxonomy::Center;

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum CenterFlag {
    Gut,
    Heart,
    Head,
}

impl CenterFlag {
    pub(crate) const fn as_domain(self) -> Center {
        match self {
            CenterFlag::Gut => Center::Gut,
            CenterFlag::Heart => Center::Heart,
            CenterFlag::Head => Center::Head,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum StageFlag {
    Primary,
    Wing,
    Stack,
}

impl StageFlag {
    pub(crate) const fn as_domain(self) -> StageKind {
        match self {
            StageFlag::Primary => StageKind::Primary,
            StageFlag::Wing => StageKind::Wing,
            StageFlag::Stack => StageKind::Stack,
        }
    }
}
