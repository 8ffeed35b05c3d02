use clap::crate_version;
use maud::{html, Markup, DOCTYPE};

use crate::prediction::models::{AssetKind, Material, SoilType};
use crate::prediction::responses::PredictionResponse;
use crate::web::form::AssessmentForm;

/// Renders the whole dashboard page: the asset form on the left,
/// the result panel (or its placeholder) on the right.
pub fn page(
    form: &AssessmentForm,
    notice: Option<Markup>,
    result: Option<&PredictionResponse>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (headers())
                title { "TunnelVision" }
            }
            body {
                section.section {
                    div.container {
                        h1.title { "TunnelVision" }
                        p.subtitle { "Failure-risk assessment for infrastructure assets" }
                        div.columns {
                            div.column."is-7" {
                                @if let Some(notice) = notice {
                                    (notice)
                                }
                                (asset_form(form))
                            }
                            div.column."is-5" {
                                @match result {
                                    Some(response) => { (result_card(response)) }
                                    None => {
                                        div.box {
                                            p.has-text-grey {
                                                "Describe the asset and press Analyze to get an assessment."
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                (footer())
            }
        }
    }
}

pub fn headers() -> Markup {
    html! {
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta charset="UTF-8";
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.3/css/bulma.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
    }
}

pub fn footer() -> Markup {
    html! {
        footer.footer {
            div.container {
                p.has-text-grey {
                    "TunnelVision " (crate_version!())
                    " · assessments are produced by the external prediction service"
                }
            }
        }
    }
}

pub fn notification(class: &str, message: &str) -> Markup {
    html! {
        div.notification.(class) { (message) }
    }
}

pub fn asset_form(form: &AssessmentForm) -> Markup {
    html! {
        form action="/assess" method="POST" {
            div.field {
                label.label { "Asset kind" }
                div.control {
                    (select("type", &form.kind, &AssetKind::ALL.map(|kind| (kind.as_str(), kind.label()))))
                }
            }

            div.field {
                label.label { "Material" }
                div.control {
                    (select("material", &form.material, &Material::ALL.map(|material| (material.as_str(), material.label()))))
                }
            }

            div.field {
                label.label { "Soil type" }
                div.control {
                    (select("soil_type", &form.soil_type, &SoilType::ALL.map(|soil| (soil.as_str(), soil.label()))))
                }
            }

            div.field {
                label.label { "Region" }
                div.control {
                    input.input type="text" name="region" value=(form.region) placeholder="Santa Clara";
                }
                p.help { "Provide either a region or an exact location." }
            }

            div.field {
                label.label { "Exact location" }
                div.field.is-grouped {
                    div.control.is-expanded {
                        input.input type="text" name="latitude" value=(form.latitude) placeholder="Latitude";
                    }
                    div.control.is-expanded {
                        input.input type="text" name="longitude" value=(form.longitude) placeholder="Longitude";
                    }
                    div.control {
                        button.button type="submit" formaction="/locate" formmethod="POST" formnovalidate {
                            "Use my current location"
                        }
                    }
                }
            }

            div.field.is-grouped {
                div.control.is-expanded {
                    label.label { "Last repair date" }
                    input.input type="date" name="last_repair_date" value=(form.last_repair_date);
                }
                div.control.is-expanded {
                    label.label { "Snapshot date" }
                    input.input type="date" name="snapshot_date" value=(form.snapshot_date);
                }
            }

            div.field.is-grouped {
                div.control.is-expanded {
                    label.label { "Installation year" }
                    input.input type="number" name="install_year" min="1800" max="2100" value=(form.install_year) required;
                }
                div.control.is-expanded {
                    label.label { "Length, m" }
                    input.input type="number" name="length_m" step="any" min="0" value=(form.length_m);
                }
            }

            div.field {
                div.control {
                    button.button.is-link type="submit" { "Analyze" }
                }
            }
        }
    }
}

pub fn result_card(response: &PredictionResponse) -> Markup {
    let class = if response.failure_in_30_days { "is-danger" } else { "is-success" };
    let gauge = response.gauge_value();
    html! {
        div.box {
            div.block {
                span.tag.is-medium.(class) { (response.risk_badge()) }
            }
            div.block {
                progress.progress.(class) value=(gauge) max="100" { (gauge) }
            }
            table.table.is-fullwidth {
                tbody {
                    tr { th { "Risk score" } td { (response.risk_score) } }
                    tr { th { "Priority" } td { (response.priority.to_string()) } }
                    tr { th { "Failure type" } td { (response.failure_type) } }
                    tr { th { "Recommended action" } td { (response.recommended_action) } }
                }
            }
        }
    }
}

fn select(name: &str, selected: &str, options: &[(&str, &str)]) -> Markup {
    html! {
        div.select.is-fullwidth {
            select name=(name) {
                @for (value, label) in options {
                    option value=(value) selected[*value == selected] { (label) }
                }
            }
        }
    }
}
