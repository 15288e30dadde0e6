/// Targets visited when neither `--url`, `--urls-file`, nor config supply any.
pub const DEFAULT_TARGETS: [&str; 49] = [
    "https://www.google.com",
    "https://www.github.com",
    "https://www.stackoverflow.com",
    "https://www.wikipedia.org",
    "https://www.reddit.com",
    "https://www.youtube.com",
    "https://www.amazon.com",
    "https://www.netflix.com",
    "https://www.twitter.com",
    "https://www.linkedin.com",
    "https://www.medium.com",
    "https://www.dev.to",
    "https://www.hackernews.com",
    "https://www.producthunt.com",
    "https://www.techcrunch.com",
    "https://www.ars-technica.com",
    "https://www.theverge.com",
    "https://www.wired.com",
    "https://www.cnn.com",
    "https://www.bbc.com",
    "https://www.nytimes.com",
    "https://www.washingtonpost.com",
    "https://www.economist.com",
    "https://www.nature.com",
    "https://www.science.org",
    "https://www.arxiv.org",
    "https://www.researchgate.net",
    "https://www.academia.edu",
    "https://www.coursera.org",
    "https://www.edx.org",
    "https://www.udemy.com",
    "https://www.freecodecamp.org",
    "https://www.codecademy.com",
    "https://www.theodinproject.com",
    "https://www.frontendmentor.io",
    "https://www.css-tricks.com",
    "https://www.smashingmagazine.com",
    "https://www.alistapart.com",
    "https://www.web.dev",
    "https://www.mozilla.org",
    "https://www.python.org",
    "https://www.nodejs.org",
    "https://www.reactjs.org",
    "https://www.vuejs.org",
    "https://www.angular.io",
    "https://www.docker.com",
    "https://www.kubernetes.io",
    "https://www.terraform.io",
    "https://www.ansible.com",
];
