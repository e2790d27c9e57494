//! View rendering for the dashboard component.
//!
//! Five panels top to bottom: upload, uploaded tables, relationships,
//! thresholds and recommendations, plus the data preview modal. Everything
//! shown is read from the core; callbacks only translate DOM events into
//! messages.

use yew::html::Scope;
use yew::prelude::*;

use dashboard_sync::datasets::{self, DatasetCard, PreviewPane};
use dashboard_sync::listing::Listing;
use dashboard_sync::notifier::NoticeScope;
use dashboard_sync::recommendations::{self, RecommendationCard};
use dashboard_sync::relationships::{self, RelationshipRow};
use dashboard_sync::selector::{DependentSelector, SelectOption};
use dashboard_sync::thresholds::{self, ThresholdRow};
use dashboard_sync::Msg as CoreMsg;

use super::helpers::{input_value, select_value};
use super::messages::Msg;
use super::state::DashboardComponent;

type Link = Scope<DashboardComponent>;

pub fn view(component: &DashboardComponent, ctx: &Context<DashboardComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="dashboard-root">
            <h1>{"CSV Analytics Dashboard"}</h1>
            { build_upload_section(component, link) }
            { build_tables_section(component, link) }
            { build_relationships_section(component, link) }
            { build_thresholds_section(component, link) }
            { build_recommendations_section(component) }
            { build_preview_modal(component, link) }
        </div>
    }
}

fn build_upload_section(component: &DashboardComponent, link: &Link) -> Html {
    html! {
        <section class="upload-section">
            <h2>{"Upload CSV Files"}</h2>
            <input type="file" id="csvFileInput" accept=".csv" multiple={true} ref={component.file_input_ref.clone()} />
            <button onclick={link.callback(|_| Msg::UploadClicked)}>{"Upload"}</button>
            { notice(component, NoticeScope::General) }
        </section>
    }
}

fn build_tables_section(component: &DashboardComponent, link: &Link) -> Html {
    let items = component
        .dashboard
        .datasets()
        .listing()
        .items()
        .iter()
        .map(|card| table_item(card, link))
        .collect::<Html>();

    html! {
        <section class="tables-section">
            <h2>{"Uploaded Tables"}</h2>
            { empty_state(component.dashboard.datasets().listing(), datasets::EMPTY_LIST) }
            <div class="tables-list">{ items }</div>
        </section>
    }
}

fn table_item(card: &DatasetCard, link: &Link) -> Html {
    let id = card.id;
    html! {
        <div class="table-item" key={id.to_string()}>
            <h3>{ &card.display_name }</h3>
            <p>{"Internal Name: "}<strong>{ &card.internal_name }</strong></p>
            <div class="headers">
                <strong>{"Columns:"}</strong>
                { for card.columns.iter().map(|column| html! { <span>{ column }</span> }) }
            </div>
            <div class="actions">
                <button class="view-data-button" onclick={link.callback(move |_| CoreMsg::PreviewRequested(id))}>
                    {"View Data"}
                </button>
            </div>
        </div>
    }
}

fn build_relationships_section(component: &DashboardComponent, link: &Link) -> Html {
    let manager = component.dashboard.relationships();
    let form = if manager.form_visible() {
        html! {
            <div class="relationship-form">
                <div class="form-row">
                    { dataset_select(manager.source(), link.callback(CoreMsg::RelationshipSourceDatasetChanged)) }
                    { column_select(manager.source(), link.callback(CoreMsg::RelationshipSourceColumnChanged)) }
                </div>
                <div class="form-row">
                    { dataset_select(manager.target(), link.callback(CoreMsg::RelationshipTargetDatasetChanged)) }
                    { column_select(manager.target(), link.callback(CoreMsg::RelationshipTargetColumnChanged)) }
                </div>
                <button onclick={link.callback(|_| CoreMsg::RelationshipSubmitted)}>{"Add Relationship"}</button>
            </div>
        }
    } else if component.dashboard.cache().is_loaded() {
        html! { <p class="empty-message">{ relationships::NOT_ENOUGH_DATASETS }</p> }
    } else {
        html! {}
    };

    html! {
        <section class="relationships-section">
            <h2>{"Define Relationships"}</h2>
            { form }
            { notice(component, NoticeScope::Relationship) }
            <h3>{"Existing Relationships"}</h3>
            { empty_state(manager.listing(), relationships::EMPTY_LIST) }
            <div class="relationships-list">
                { for manager.listing().items().iter().map(relationship_item) }
            </div>
        </section>
    }
}

fn relationship_item(row: &RelationshipRow) -> Html {
    html! {
        <div class="relationship-item">
            <strong>{ &row.source_table }</strong>{ format!(".{}", row.source_column) }
            {"  \u{2014}  "}
            <strong>{ &row.target_table }</strong>{ format!(".{}", row.target_column) }
        </div>
    }
}

fn build_thresholds_section(component: &DashboardComponent, link: &Link) -> Html {
    let manager = component.dashboard.thresholds();
    let form = if manager.form_visible() {
        let capabilities = manager.capabilities();
        let preview = manager.preview();
        html! {
            <div class="threshold-form">
                <div class="form-row">
                    { dataset_select(manager.selector(), link.callback(CoreMsg::ThresholdDatasetChanged)) }
                    { column_select(manager.selector(), link.callback(CoreMsg::ThresholdColumnChanged)) }
                </div>
                <div class="form-row">
                    { plain_select(&capabilities.functions, "Select Function", manager.function(), link.callback(CoreMsg::ThresholdFunctionChanged)) }
                    { plain_select(&capabilities.operators, "Select Operator", manager.operator(), link.callback(CoreMsg::ThresholdOperatorChanged)) }
                    <input
                        type="text"
                        placeholder="Threshold value"
                        value={manager.value().to_string()}
                        oninput={link.callback(|e: InputEvent| CoreMsg::ThresholdValueChanged(input_value(e)))}
                    />
                </div>
                <div class={classes!("current-value", preview.is_error().then_some("error-value"))}>
                    { preview.text() }
                </div>
                <button onclick={link.callback(|_| CoreMsg::ThresholdSubmitted)}>{"Add Threshold"}</button>
            </div>
        }
    } else if component.dashboard.cache().is_loaded() {
        html! { <p class="empty-message">{ thresholds::NO_DATASETS }</p> }
    } else {
        html! {}
    };

    html! {
        <section class="thresholds-section">
            <h2>{"Define Thresholds"}</h2>
            { form }
            { notice(component, NoticeScope::Threshold) }
            <h3>{"Active Thresholds"}</h3>
            { empty_state(manager.listing(), thresholds::EMPTY_LIST) }
            <div class="thresholds-list">
                { for manager.listing().items().iter().map(threshold_item) }
            </div>
        </section>
    }
}

fn threshold_item(row: &ThresholdRow) -> Html {
    html! { <div class="threshold-item"><strong>{ &row.label }</strong></div> }
}

fn build_recommendations_section(component: &DashboardComponent) -> Html {
    let listing = component.dashboard.recommendations().listing();
    html! {
        <section class="recommendations-section">
            <h2>{"Recommendations"}</h2>
            { empty_state(listing, recommendations::EMPTY_LIST) }
            <div class="recommendations-list">
                { for listing.items().iter().map(recommendation_item) }
            </div>
        </section>
    }
}

fn recommendation_item(card: &RecommendationCard) -> Html {
    html! {
        <div class="recommendation-item">
            <h4>{ &card.heading }</h4>
            <p>{ &card.text }</p>
            <div class="details">
                { format!("Triggered when: {}", card.condition) }<br />
                { format!("Current Value: {}", card.current_value) }<br />
                { format!("Generated at: {}", card.generated_at) }
            </div>
        </div>
    }
}

fn build_preview_modal(component: &DashboardComponent, link: &Link) -> Html {
    let pane = component.dashboard.datasets().preview();
    if *pane == PreviewPane::Closed {
        return html! {};
    }
    let close = link.callback(|_| CoreMsg::PreviewClosed);
    let table = match pane {
        PreviewPane::Open(preview) => html! {
            <table class="preview-table">
                <thead>
                    <tr>{ for preview.columns.iter().map(|column| html! { <th>{ column }</th> }) }</tr>
                </thead>
                <tbody>
                    { for (0..preview.data.len()).map(|row| html! {
                        <tr>{ for preview.columns.iter().map(|column| html! { <td>{ preview.cell(row, column) }</td> }) }</tr>
                    }) }
                </tbody>
            </table>
        },
        PreviewPane::Closed | PreviewPane::Loading(_) => html! {},
    };

    html! {
        <div class="modal" onclick={close.clone()}>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <span class="close-button" onclick={close}>{"\u{00d7}"}</span>
                <h2>{ pane.title() }</h2>
                { table }
            </div>
        </div>
    }
}

fn notice(component: &DashboardComponent, scope: NoticeScope) -> Html {
    match component.dashboard.notices().current(scope) {
        Some(notice) => html! { <div class={notice.kind.css_class()}>{ &notice.text }</div> },
        None => html! {},
    }
}

fn empty_state<T>(listing: &Listing<T>, text: &'static str) -> Html {
    if listing.is_empty_state() {
        html! { <p class="empty-message">{ text }</p> }
    } else {
        html! {}
    }
}

fn dataset_select(selector: &DependentSelector, onchange: Callback<String>) -> Html {
    let current = selector.dataset_value();
    html! {
        <select onchange={Callback::from(move |e: Event| onchange.emit(select_value(e)))}>
            <option value="" selected={current.is_empty()}>{ selector.dataset_placeholder() }</option>
            { for selector.dataset_options().iter().map(|SelectOption { value, label }| html! {
                <option value={value.clone()} selected={*value == current}>{ label }</option>
            }) }
        </select>
    }
}

fn column_select(selector: &DependentSelector, onchange: Callback<String>) -> Html {
    let current = selector.column_value();
    html! {
        <select onchange={Callback::from(move |e: Event| onchange.emit(select_value(e)))}>
            <option value="" selected={current.is_empty()}>{ selector.column_placeholder() }</option>
            { for selector.column_options().iter().map(|column| html! {
                <option value={column.clone()} selected={*column == current}>{ column }</option>
            }) }
        </select>
    }
}

fn plain_select(options: &[String], placeholder: &'static str, current: Option<&str>, onchange: Callback<String>) -> Html {
    html! {
        <select onchange={Callback::from(move |e: Event| onchange.emit(select_value(e)))}>
            <option value="" selected={current.is_none()}>{ placeholder }</option>
            { for options.iter().map(|option| html! {
                <option value={option.clone()} selected={current == Some(option.as_str())}>{ option }</option>
            }) }
        </select>
    }
}
