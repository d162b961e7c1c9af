//! The "Spending Analysis" chart on the dashboard.
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! rendered with an HTML container and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend},
    datatype::DataPointItem,
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction, Tooltip, Trigger,
    },
    series::{Pie, bar::Bar},
};
use maud::{Markup, PreEscaped, html};
use serde::Deserialize;

use crate::{category::category_of, html::HeadElement, transaction::aggregation::CategoryTotal};

/// The ECharts build loaded on the dashboard.
pub(super) const ECHARTS_SCRIPT: &str =
    "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// How the spending per category is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
}

impl ChartKind {
    pub(super) fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Pie => "Pie",
        }
    }

    pub(super) fn query_value(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

pub(super) fn chart_container(chart: &DashboardChart) -> Markup {
    html!(
        div
            id=(chart.id)
            class="min-h-[380px] w-full rounded dark:bg-gray-100"
        {}
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// One data point per category, colored with the category's color.
fn category_data_points(totals: &[CategoryTotal<'_>]) -> Vec<DataPointItem> {
    totals
        .iter()
        .map(|total| {
            let category = category_of(total.category_id);

            DataPointItem::new(round_to_cents(total.total))
                .name(category.name)
                .item_style(ItemStyle::new().color(category.color_hex))
        })
        .collect()
}

/// Chart spending per category as either a bar or a pie chart.
pub(super) fn spending_chart(totals: &[CategoryTotal<'_>], kind: ChartKind) -> Chart {
    match kind {
        ChartKind::Bar => spending_bar_chart(totals),
        ChartKind::Pie => spending_pie_chart(totals),
    }
}

fn spending_bar_chart(totals: &[CategoryTotal<'_>]) -> Chart {
    let labels: Vec<&str> = totals
        .iter()
        .map(|total| category_of(total.category_id).name)
        .collect();

    Chart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter())
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Bar::new()
                .name("Spending")
                .data(category_data_points(totals)),
        )
}

fn spending_pie_chart(totals: &[CategoryTotal<'_>]) -> Chart {
    Chart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().bottom("0%"))
        .series(
            Pie::new()
                .name("Spending")
                .radius(vec!["40%", "70%"])
                .data(category_data_points(totals)),
        )
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}
