//! Static explanatory text shown below the chart.

use crate::config::LabelSet;

const ENGLISH: [(&str, &str); 4] = [
    (
        "About the data",
        "Coverage is the share of the target population vaccinated for each basic \
         vaccine indicator (BCG, polio, DTP, hepatitis B, Hib and MMR first dose). \
         Values are averaged over indicators for each state and year and can exceed \
         100% when doses are applied to children from other states.",
    ),
    (
        "Development index",
        "MHDI_I is the income dimension of the municipal human-development index, \
         averaged over the municipalities of each state.",
    ),
    (
        "Reading the chart",
        "Each point is one state. A positive Pearson correlation means states with \
         higher income levels tend to reach higher coverage. The p-value tests the \
         hypothesis of no linear association; with 27 states it should be read with \
         care.",
    ),
    (
        "Limitations",
        "Correlation is not causation. Regional differences in logistics, vaccine \
         supply and reporting delays also shape coverage and are not captured here.",
    ),
];

const PORTUGUESE: [(&str, &str); 4] = [
    (
        "Sobre os dados",
        "A cobertura é a parcela da população-alvo vacinada em cada indicador de \
         vacina básica (BCG, pólio, DTP, hepatite B, Hib e primeira dose da tríplice \
         viral). Os valores são a média dos indicadores por estado e ano e podem \
         passar de 100% quando doses são aplicadas em crianças de outros estados.",
    ),
    (
        "Índice de desenvolvimento",
        "O MHDI_I é a dimensão renda do índice de desenvolvimento humano municipal, \
         em média sobre os municípios de cada estado.",
    ),
    (
        "Como ler o gráfico",
        "Cada ponto é um estado. Uma correlação de Pearson positiva indica que \
         estados com renda mais alta tendem a alcançar maior cobertura. O p-valor \
         testa a hipótese de ausência de associação linear; com 27 estados, deve ser \
         lido com cautela.",
    ),
    (
        "Limitações",
        "Correlação não implica causalidade. Diferenças regionais de logística, \
         abastecimento de vacinas e atrasos de notificação também afetam a cobertura \
         e não são capturadas aqui.",
    ),
];

/// (heading, body) pairs in display order.
pub fn sections(labels: LabelSet) -> &'static [(&'static str, &'static str)] {
    match labels {
        LabelSet::English => &ENGLISH,
        LabelSet::Portuguese => &PORTUGUESE,
    }
}

pub fn show(ui: &mut egui::Ui, labels: LabelSet) {
    for (heading, body) in sections(labels) {
        ui.label(egui::RichText::new(*heading).size(14.0).strong());
        ui.label(egui::RichText::new(*body).size(12.0));
        ui.add_space(8.0);
    }
}
