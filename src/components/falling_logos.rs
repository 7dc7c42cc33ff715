//! Decorative background of tech logos drifting down the page.

use leptos::prelude::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Logo {
	name: &'static str,
	src: &'static str,
}

// Repeats weight the random pick.
const TECH_LOGOS: &[Logo] = &[
	Logo { name: "Next.js", src: "/logos/nextjs.svg" },
	Logo { name: "React3d", src: "/logos/Reactjs3d.svg" },
	Logo { name: "jsnew3d", src: "/logos/js3dnew.svg" },
	Logo { name: "jsnew3d", src: "/logos/js3dnew.svg" },
	Logo { name: "js3d", src: "/logos/JS3d.svg" },
	Logo { name: "React", src: "/logos/react.svg" },
	Logo { name: "React", src: "/logos/react.svg" },
	Logo { name: "React", src: "/logos/react.svg" },
	Logo { name: "TypeScript", src: "/logos/typescript.svg" },
	Logo { name: "TypeScript", src: "/logos/typescript.svg" },
	Logo { name: "TypeScript", src: "/logos/typescript.svg" },
	Logo { name: "HTML", src: "/logos/html.svg" },
	Logo { name: "CSS", src: "/logos/css.svg" },
	Logo { name: "CSS", src: "/logos/css.svg" },
	Logo { name: "Tailwind CSS", src: "/logos/tailwind.svg" },
	Logo { name: "Tailwind CSS", src: "/logos/tailwind.svg" },
	Logo { name: "Tailwind CSS", src: "/logos/tailwind.svg" },
	Logo { name: "shadcn/ui", src: "/logos/shadcn.svg" },
	Logo { name: "JavaScript", src: "/logos/javascript.svg" },
];

const PARTICLE_COUNT: usize = 30;

const KEYFRAMES: &str = "\
@keyframes logo-fall { from { transform: translateY(0vh); } to { transform: translateY(100vh); } }
@keyframes logo-fade { 0% { opacity: 0.2; } 33.333% { opacity: 0.15; } 66.667% { opacity: 0.1; } 100% { opacity: 0.05; } }
@keyframes logo-spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }";

/// One falling logo. Times are in seconds, `x` in percent of the page width.
#[derive(Clone, Debug, PartialEq)]
struct FallingLogo {
	logo: Logo,
	x: f64,
	delay: f64,
	size: f64,
	fall_duration: f64,
	fade_duration: f64,
	spin_duration: f64,
}

impl FallingLogo {
	fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
		Self {
			logo: TECH_LOGOS[rng.gen_range(0..TECH_LOGOS.len())],
			x: rng.gen_range(0.0..150.0),
			delay: rng.gen_range(0.0..3.0),
			size: rng.gen_range(30.0..70.0),
			fall_duration: rng.gen_range(15.0..25.0),
			fade_duration: rng.gen_range(15.0..25.0),
			spin_duration: rng.gen_range(20.0..30.0),
		}
	}

	/// Style of the wrapper that falls and fades.
	fn outer_style(&self) -> String {
		format!(
			"left: {:.2}%; top: 0; animation: logo-fall {:.2}s linear {:.2}s infinite, logo-fade {:.2}s linear {:.2}s infinite;",
			self.x, self.fall_duration, self.delay, self.fade_duration, self.delay
		)
	}

	/// Style of the inner box that spins.
	fn inner_style(&self) -> String {
		format!(
			"width: {:.0}px; height: {:.0}px; animation: logo-spin {:.2}s linear {:.2}s infinite;",
			self.size, self.size, self.spin_duration, self.delay
		)
	}
}

fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<FallingLogo> {
	(0..count).map(|_| FallingLogo::random(rng)).collect()
}

/// Fixed set of logos, scattered once per mount, drifting behind the page.
#[component]
pub fn FallingLogos() -> impl IntoView {
	let logos = scatter(PARTICLE_COUNT, &mut rand::thread_rng());

	view! {
		<div class="absolute inset-0 overflow-hidden -z-10 pointer-events-none">
			<style>{KEYFRAMES}</style>
			{logos
				.into_iter()
				.map(|falling| {
					view! {
						<div class="absolute" style=falling.outer_style()>
							<div class="relative" style=falling.inner_style()>
								<img
									src=falling.logo.src
									alt=falling.logo.name
									class="w-full h-full object-contain"
								/>
							</div>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}
