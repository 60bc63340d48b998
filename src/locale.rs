//! UI text for both label languages.

use crate::config::LabelSet;

pub struct Strings {
    pub app_title: &'static str,
    pub sidebar_title: &'static str,
    pub year: &'static str,
    pub show_regression: &'static str,
    pub show_labels: &'static str,
    pub chart_title: &'static str,
    pub x_axis: &'static str,
    pub y_axis: &'static str,
    pub regression_series: &'static str,
    pub correlation: &'static str,
    pub p_value: &'static str,
    pub perfect_correlation: &'static str,
    pub insufficient_data: &'static str,
    pub undefined_correlation: &'static str,
    pub best_regions: &'static str,
    pub worst_regions: &'static str,
    pub region: &'static str,
    pub coverage: &'static str,
    pub trend_title: &'static str,
    pub points: &'static str,
    pub no_data: &'static str,
}

pub const ENGLISH: Strings = Strings {
    app_title: "Vaccination Coverage Dashboard",
    sidebar_title: "Controls",
    year: "Year",
    show_regression: "Show regression line",
    show_labels: "Show state names",
    chart_title: "Vaccination Coverage vs MHDI_I",
    x_axis: "Human Development Index (MHDI_I)",
    y_axis: "Mean Vaccination Coverage (%)",
    regression_series: "Linear Regression",
    correlation: "Pearson correlation",
    p_value: "P-value",
    perfect_correlation: "perfect correlation",
    insufficient_data: "Insufficient data to compute the correlation",
    undefined_correlation: "Correlation undefined (constant input)",
    best_regions: "Top states",
    worst_regions: "Bottom states",
    region: "Region",
    coverage: "Coverage (%)",
    trend_title: "Correlation by year",
    points: "N",
    no_data: "No Data",
};

pub const PORTUGUESE: Strings = Strings {
    app_title: "Painel de Cobertura Vacinal",
    sidebar_title: "Controle",
    year: "Ano",
    show_regression: "Mostrar linha de regressão",
    show_labels: "Mostrar nomes dos estados",
    chart_title: "Cobertura Vacinal vs MHDI_I",
    x_axis: "Índice de Desenvolvimento Humano (MHDI_I)",
    y_axis: "Cobertura Vacinal Média (%)",
    regression_series: "Regressão Linear",
    correlation: "Correlação de Pearson",
    p_value: "P-valor",
    perfect_correlation: "correlação perfeita",
    insufficient_data: "Dados insuficientes para calcular a correlação",
    undefined_correlation: "Correlação indefinida (entrada constante)",
    best_regions: "Melhores estados",
    worst_regions: "Piores estados",
    region: "Região",
    coverage: "Cobertura (%)",
    trend_title: "Correlação por ano",
    points: "N",
    no_data: "Sem dados",
};

pub fn strings(set: LabelSet) -> &'static Strings {
    match set {
        LabelSet::English => &ENGLISH,
        LabelSet::Portuguese => &PORTUGUESE,
    }
}
