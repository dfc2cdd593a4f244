//! HTML 视图
//!
//! 图表容器、Logo 和院校列表页，模板在启动时一次性编译。

use domain::{EstablishmentFilter, QueryFilter};
use minijinja::{context, Environment, Error};
use serde::Serialize;

const CHART_CONTAINER: &str = r#"<figure class="chart" data-chart="{{ slug }}">
  <figcaption class="chart-title">{{ title }}</figcaption>
  <div class="chart-body">{{ body|safe }}</div>
</figure>"#;

const LOGO: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32" width="{{ size }}" height="{{ size }}" role="img" aria-label="{{ label }}">
  <path d="M16 3 3 9l13 6 13-6-13-6Z" fill="currentColor"/>
  <path d="M8 13v7c0 2 4 4 8 4s8-2 8-4v-7l-8 4-8-4Z" fill="currentColor" opacity=".7"/>
</svg>"#;

const ESTABLISHMENTS_PAGE: &str = r#"<!doctype html>
<html lang="fr">
<head><meta charset="utf-8"><title>Établissements</title></head>
<body>
<header>{{ logo|safe }}</header>
<form method="post" action="/establishments/filters">
{%- for name, value in hidden %}
  <input type="hidden" name="{{ name }}" value="{{ value }}">
{%- endfor %}
  <input type="search" name="name_contains" value="{{ name_contains }}">
  <button type="submit">Filtrer</button>
</form>
{{ results|safe }}
</body>
</html>"#;

const ESTABLISHMENT_LIST: &str = r#"<p class="total">{{ page.total_items }} établissement(s)</p>
<ul class="establishments">
{%- for item in page["items"] %}
  <li data-id="{{ item.id }}">{{ item.name }}{% if item.acronym %} ({{ item.acronym }}){% endif %}</li>
{%- endfor %}
</ul>
<nav class="pagination">page {{ page.page }} / {{ page.total_pages }}</nav>"#;

pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        env.add_template("chart_container.html", CHART_CONTAINER)?;
        env.add_template("logo.svg", LOGO)?;
        env.add_template("establishments.html", ESTABLISHMENTS_PAGE)?;
        env.add_template("establishment_list.html", ESTABLISHMENT_LIST)?;
        Ok(Self { env })
    }

    pub fn logo(&self, size: u32) -> Result<String, Error> {
        self.env
            .get_template("logo.svg")?
            .render(context! { size => size, label => "Établissements" })
    }

    /// 渲染院校列表页，`page` 为分页结果的 JSON 形式。
    /// 除搜索框外的筛选条件作为隐藏字段随表单一起提交，提交后不会丢失。
    pub fn establishments_page<P: Serialize>(&self, page: &P, filter: &EstablishmentFilter) -> Result<String, Error> {
        let hidden: Vec<(String, String)> = filter
            .query_pairs()
            .into_iter()
            .filter(|(name, _)| name != "name_contains")
            .collect();
        let list = self
            .env
            .get_template("establishment_list.html")?
            .render(context! { page => page })?;
        let results = ChartContainer::new("Résultats").render(self, &list)?;

        self.env.get_template("establishments.html")?.render(context! {
            logo => self.logo(48)?,
            hidden => hidden,
            name_contains => filter.name_contains.as_deref().unwrap_or_default(),
            results => results,
        })
    }
}

/// 带标题的图表外框
pub struct ChartContainer {
    title: String,
}

impl ChartContainer {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    pub fn render(&self, views: &Views, body: &str) -> Result<String, Error> {
        let slug = self.title.to_lowercase().replace(' ', "-");
        views.env.get_template("chart_container.html")?.render(context! {
            slug => slug,
            title => &self.title,
            body => body,
        })
    }
}

/// 图表提示框，暂时不输出任何内容
pub struct ChartTooltip;

impl ChartTooltip {
    pub fn render<P: ?Sized>(&self, _props: &P) -> String {
        String::new()
    }
}

/// 图表图例，暂时不输出任何内容
pub struct ChartLegend;

impl ChartLegend {
    pub fn render<P: ?Sized>(&self, _props: &P) -> String {
        String::new()
    }
}
