//! Stable constants shared across services and commands.

/// Format used for the human-readable `dateStr` stamped on history entries.
/// Part of the persisted record, so changing it only affects new entries.
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Built-in service catalog: (id, name, default hours).
pub const DEFAULT_SERVICES: &[(&str, &str, f64)] = &[
    ("servico_lp", "Landing Page Simples", 8.0),
    ("servico_inst", "Site Institucional (5 abas)", 15.0),
    ("servico_seo", "SEO Básico On-Page", 3.0),
    ("servico_gmb", "Google My Business", 7.0),
    ("servico_seo_adv", "SEO Avançado", 7.0),
    ("servico_host_domain", "Hospedagem e Domínio", 24.0),
];
