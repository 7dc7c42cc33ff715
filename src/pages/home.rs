use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;

use crate::components::download::{DownloadCounter, LocalStorageCounter, ResumeDownload};
use crate::components::falling_logos::FallingLogos;
use crate::components::skill_network::{SkillNetwork, Skill, SkillLevel};

/// Category id that shows every skill.
const ALL: &str = "all";

/// (id, name, devicon slug, description, category, proficiency, related)
type SkillRow = (&'static str, &'static str, &'static str, &'static str, &'static str, u8, &'static [&'static str]);

const SKILLS: &[SkillRow] = &[
	("react", "React", "react", "Building interactive UIs with React and its ecosystem", "frontend", 85, &["javascript", "typescript", "redux", "nextjs"]),
	("nextjs", "Next.js", "nextjs", "Server-side rendering, static site generation, and API routes", "frontend", 80, &["react", "typescript", "javascript"]),
	("typescript", "TypeScript", "typescript", "Type-safe JavaScript development", "frontend", 75, &["javascript", "react", "nextjs"]),
	("tailwind", "Tailwind CSS", "tailwindcss", "Utility-first CSS framework for rapid UI development", "frontend", 90, &["css", "html", "shadcn"]),
	("shadcn", "Shadcn UI", "react", "Component library built with Radix UI and Tailwind CSS", "frontend", 85, &["tailwind", "react"]),
	("javascript", "JavaScript", "javascript", "Core language for web development", "frontend", 90, &["typescript", "react", "html", "css"]),
	("html", "HTML5", "html5", "Semantic markup and structure", "frontend", 95, &["css", "javascript"]),
	("css", "CSS3", "css3", "Styling and animations", "frontend", 90, &["html", "tailwind"]),
	("redux", "Redux", "redux", "State management for complex applications", "frontend", 75, &["react", "javascript"]),
	("framer", "Framer Motion", "framermotion", "Production-ready animation library for React", "frontend", 80, &["react", "javascript"]),
	("git", "Git", "git", "Version control system for tracking changes", "tools", 85, &[]),
	("figma", "Figma", "figma", "Collaborative interface design tool", "design", 75, &["css", "tailwind"]),
];

fn portfolio_skills() -> Vec<Skill> {
	SKILLS
		.iter()
		.map(|&(id, name, icon, description, category, proficiency, related)| Skill {
			id: id.into(),
			name: name.into(),
			icon: format!("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/{icon}/{icon}-original.svg"),
			description: description.into(),
			level: SkillLevel::Intermediate,
			category: category.into(),
			proficiency,
			related_skills: Some(related.iter().map(|s| s.to_string()).collect()),
		})
		.collect()
}

#[derive(Clone, Debug, PartialEq)]
struct CategoryTab {
	id: String,
	label: String,
	count: usize,
}

/// "All" followed by every category in first-seen order, empty ones omitted.
fn category_tabs(skills: &[Skill]) -> Vec<CategoryTab> {
	let mut tabs = vec![CategoryTab {
		id: ALL.into(),
		label: "All Skills".into(),
		count: skills.len(),
	}];
	for skill in skills {
		match tabs[1..].iter_mut().find(|t| t.id == skill.category) {
			Some(tab) => tab.count += 1,
			None => tabs.push(CategoryTab {
				id: skill.category.clone(),
				label: capitalize(&skill.category),
				count: 1,
			}),
		}
	}
	tabs.retain(|t| t.count > 0);
	tabs
}

fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

fn filter_skills(skills: &[Skill], category: &str) -> Vec<Skill> {
	skills
		.iter()
		.filter(|s| category == ALL || s.category == category)
		.cloned()
		.collect()
}

fn window_width() -> Option<f64> {
	web_sys::window()
		.and_then(|w| w.inner_width().ok())
		.and_then(|v| v.as_f64())
}

fn network_width(window_width: Option<f64>) -> f64 {
	window_width.map(|w| (w - 100.0).max(0.0)).unwrap_or(1000.0)
}

fn network_height(window_width: Option<f64>) -> f64 {
	match window_width {
		Some(w) if w < 640.0 => 500.0,
		Some(w) if w < 1024.0 => 550.0,
		_ => 600.0,
	}
}

#[component]
fn SkillsSection() -> impl IntoView {
	let skills = portfolio_skills();
	let tabs = category_tabs(&skills);
	let (active, set_active) = signal(ALL.to_string());
	let (viewport, set_viewport) = signal(window_width());

	let resize = window_event_listener(ev::resize, move |_| set_viewport.set(window_width()));
	on_cleanup(move || resize.remove());

	let visible = Signal::derive(move || active.with(|a| filter_skills(&skills, a)));
	let width = Signal::derive(move || network_width(viewport.get()));
	let height = Signal::derive(move || network_height(viewport.get()));

	view! {
		<section id="skills" class="py-20 relative overflow-hidden">
			<div class="container px-4 md:px-6 relative z-10">
				<div class="space-y-4 text-center mb-12">
					<h2 class="text-3xl font-bold tracking-tighter md:text-4xl/tight">"Technical Skills"</h2>
					<p class="mx-auto max-w-[700px] text-muted-foreground md:text-xl">
						"Explore my interconnected web of technical expertise"
					</p>
				</div>

				<div class="flex flex-wrap justify-center gap-2 mb-8">
					{tabs
						.into_iter()
						.map(|tab| {
							let (id_class, id_click) = (tab.id.clone(), tab.id);
							view! {
								<button
									class=move || {
										if active.with(|a| *a == id_class) {
											"px-4 py-2 rounded-full text-sm font-medium bg-primary text-primary-foreground shadow-md"
										} else {
											"px-4 py-2 rounded-full text-sm font-medium bg-card text-muted-foreground border border-border"
										}
									}
									on:click=move |_| set_active.set(id_click.clone())
								>
									{format!("{} ({})", tab.label, tab.count)}
								</button>
							}
						})
						.collect_view()}
				</div>

				<div class="mb-16">
					<SkillNetwork skills=visible width height />
				</div>
			</div>
		</section>
	}
}

#[component]
fn Hero() -> impl IntoView {
	let counter: Rc<dyn DownloadCounter> = Rc::new(LocalStorageCounter::new());

	view! {
		<header class="flex flex-col items-center gap-6 pt-24 text-center">
			<h1 class="text-4xl font-bold">"Hi, I build things for the web"</h1>
			<ResumeDownload href="/resume.pdf" counter />
		</header>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<main class="relative min-h-screen">
				<FallingLogos />
				<Hero />
				<SkillsSection />
			</main>
		</ErrorBoundary>
	}
}
