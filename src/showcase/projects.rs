//! Project catalog shown in the showcase grid and modal

/// One showcased project
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Short captions rendered one per carousel slide
    pub slides: &'static [&'static str],
    pub demo: Option<&'static str>,
    pub repository: Option<&'static str>,
}

const REPOSITORY: &str = "https://github.com/Thirumoorthi1234";

static PROJECTS: [Project; 3] = [
    Project {
        title: "BMI Calculator",
        description: "An easy-to-navigate platform for calculating Body Mass Index (BMI), \
            an essential metric for evaluating if an individual's weight is suitable for \
            their height. Users enter their height and weight to obtain their BMI value, \
            along with an interpretation indicating whether they are underweight, within \
            a healthy weight range, overweight, or classified as obese.",
        tags: &["HTML", "CSS", "JavaScript", "Netlify"],
        slides: &["⚖", "📊", "💪"],
        demo: Some("https://bmicalculator-thiru.netlify.app/"),
        repository: Some(REPOSITORY),
    },
    Project {
        title: "Full Stack Training Platform",
        description: "Academic training program delivered to undergraduate students at \
            Hindustan Arts and Science College, covering the complete MERN stack. Real-time \
            projects, assessments, and hands-on workshops helped bridge the gap between \
            academic learning and industry expectations.",
        tags: &["React.js", "Node.js", "MongoDB", "Express.js", "Git"],
        slides: &["🎓", "📚", "💡"],
        demo: None,
        repository: Some(REPOSITORY),
    },
    Project {
        title: "Portfolio Website",
        description: "A fully responsive personal portfolio featuring dark/light mode, \
            smooth scroll animations, modal project showcases, a validated contact form, \
            and an animated geometric background.",
        tags: &["HTML5", "CSS3", "JavaScript"],
        slides: &["🌐", "🎨", "✨"],
        demo: None,
        repository: Some(REPOSITORY),
    },
];

/// All showcased projects, in display order
pub fn catalog() -> &'static [Project] {
    &PROJECTS
}
