use crate::{
    adapters::views::{
        charts::{audits_pie_options, skills_radar_options, xp_bar_options, CHART_LIBRARY_URL},
        escape_html, layout, script_json,
    },
    application::dto::dashboard_dto::DashboardDTO,
};

const CHART_BOOTSTRAP: &str = r#"<script>
document.addEventListener('DOMContentLoaded', () => {
  const charts = [
    ['progress', 'progress-options', (o) => { o.dataLabels.formatter = (val) => val + ' kB'; }],
    ['skills', 'skills-options', () => {}],
    ['audits', 'audits-options', (o) => {
      o.dataLabels = { formatter(val, opts) { return [opts.w.globals.labels[opts.seriesIndex], val.toFixed(1) + '%']; } };
    }],
  ];
  for (const [target, source, decorate] of charts) {
    const el = document.getElementById(target);
    const raw = document.getElementById(source);
    if (!el || !raw || typeof ApexCharts === 'undefined') continue;
    const options = JSON.parse(raw.textContent);
    decorate(options);
    new ApexCharts(el, options).render();
  }
});
</script>"#;

const LOGOUT_FORM: &str = r#"<form method="post" action="/logout"><button id="logout-btn" type="submit">Log out</button></form>"#;

/// Dashboard page. `None` renders the empty shell used when the profile
/// could not be loaded.
pub fn render(dashboard: Option<&DashboardDTO>) -> String {
    let Some(dashboard) = dashboard else {
        let body = format!(
            r#"<header class="card"><h1 id="student-name"></h1>{logout}</header>
<section class="card"><p id="student-xp-amount"></p><p id="student-audit-ratio"></p></section>"#,
            logout = LOGOUT_FORM
        );
        return layout("Dashboard", "", &body);
    };

    let profile = &dashboard.profile;
    let head = format!(
        r#"<script src="{lib}"></script>
{bootstrap}"#,
        lib = CHART_LIBRARY_URL,
        bootstrap = CHART_BOOTSTRAP
    );

    let task_rows: String = dashboard
        .tasks
        .iter()
        .map(|task| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&task.name),
                task.amount,
                escape_html(&task.date)
            )
        })
        .collect();

    let body = format!(
        r#"<header class="card">
<div>
<h1 id="student-name">{name}</h1>
<p id="student-email">{email}</p>
<form id="student-gitea" method="get" action="{git_url}"><button type="submit">Git profile ({login})</button></form>
</div>
{logout}
</header>
<section class="card">
<p id="student-xp-amount">{xp}</p>
<p id="student-audit-ratio">{ratio}</p>
</section>
<section class="charts">
<div class="card"><div id="audits"></div></div>
<div class="card"><div id="skills"></div></div>
</section>
<section class="card"><div id="progress"></div></section>
<section class="card">
<table id="task-history">
<thead><tr><th>Task</th><th>XP</th><th>Date</th></tr></thead>
<tbody>
{task_rows}</tbody>
</table>
</section>
<script type="application/json" id="progress-options">{progress}</script>
<script type="application/json" id="skills-options">{skills}</script>
<script type="application/json" id="audits-options">{audits}</script>"#,
        name = escape_html(&profile.full_name),
        email = escape_html(&profile.email),
        git_url = escape_html(&profile.git_url),
        login = escape_html(&profile.login),
        logout = LOGOUT_FORM,
        xp = escape_html(&dashboard.xp_label()),
        ratio = escape_html(&dashboard.audit_ratio_label()),
        task_rows = task_rows,
        progress = script_json(&xp_bar_options(&dashboard.xp_series())),
        skills = script_json(&skills_radar_options(&dashboard.skill_chart_series())),
        audits = script_json(&audits_pie_options(&dashboard.audits)),
    );

    layout("Dashboard", &head, &body)
}
