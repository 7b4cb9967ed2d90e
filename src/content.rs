//! Static site content. Order of each slice is display order.

/// Symbolic glyph names resolved to inline SVG by `components::Icon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Scale,
    Users,
    Briefcase,
    Building,
    Menu,
    Close,
    Check,
    Chevron,
    Phone,
    Mail,
    MapPin,
}

pub struct NavEntry {
    pub label: &'static str,
    pub target: &'static str,
}

pub struct ServiceEntry {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
}

pub struct FeatureEntry {
    pub title: &'static str,
    pub description: &'static str,
}

pub const NAV_LINKS: &[NavEntry] = &[
    NavEntry {
        label: "Início",
        target: "#hero",
    },
    NavEntry {
        label: "Atuação",
        target: "#servicos",
    },
    NavEntry {
        label: "Diferenciais",
        target: "#diferenciais",
    },
    NavEntry {
        label: "Sobre",
        target: "#sobre",
    },
    NavEntry {
        label: "Contato",
        target: "#contato",
    },
];

pub const SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        id: 1,
        title: "Direito Civil",
        description: "Resolução de conflitos patrimoniais, contratuais e responsabilidade civil com estratégia e precisão.",
        glyph: Glyph::Scale,
    },
    ServiceEntry {
        id: 2,
        title: "Direito de Família",
        description: "Atuação sensível e discreta em divórcios, partilhas, sucessões e planejamento patrimonial.",
        glyph: Glyph::Users,
    },
    ServiceEntry {
        id: 3,
        title: "Direito Trabalhista",
        description: "Defesa robusta de interesses corporativos e individuais em litígios complexos.",
        glyph: Glyph::Briefcase,
    },
    ServiceEntry {
        id: 4,
        title: "Direito Empresarial",
        description: "Consultoria jurídica para governança, compliance e fusões com foco na segurança do negócio.",
        glyph: Glyph::Building,
    },
];

pub const DIFFERENTIATORS: &[FeatureEntry] = &[
    FeatureEntry {
        title: "Atendimento Personalizado",
        description: "Cada cliente é único. Desenvolvemos estratégias sob medida para cada caso, com comunicação direta com os sócios.",
    },
    FeatureEntry {
        title: "Transparência Absoluta",
        description: "Clareza em todas as etapas do processo, honorários e probabilidades de êxito. A confiança é a base de nossa atuação.",
    },
    FeatureEntry {
        title: "Excelência Técnica",
        description: "Corpo jurídico formado nas melhores universidades, com constante atualização em jurisprudência e doutrina.",
    },
];
