//! Built-in lookup tables. `AnalysisSettings::default()` is assembled from these;
//! a JSON settings file can replace any of them without touching algorithm code.

pub const STOP_WORDS: &[&str] = &[
    // common English
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "e.g",
    "either", "etc", "few", "for", "from", "further", "had", "has", "have", "having", "he", "her",
    "here", "hers", "herself", "him", "himself", "his", "how", "i", "i.e", "if", "in", "into",
    "is", "it", "its", "itself", "just", "may", "me", "might", "more", "most", "much", "must",
    "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other", "our",
    "ours", "ourselves", "out", "over", "own", "per", "same", "she", "should", "so", "some",
    "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "us",
    "very", "via", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "within", "would", "you", "your", "yours", "yourself", "yourselves",
    // contraction fragments left behind by apostrophe splitting
    "s", "t", "d", "m", "ll", "re", "ve",
    // job-posting boilerplate
    "looking", "seeking", "ideal", "candidate", "candidates", "join", "role", "position",
    "opportunity", "including", "include", "includes", "ability", "able", "strong", "excellent",
    "good", "great", "plus", "preferred", "required", "requirements", "responsibilities",
    "year", "years", "work", "working", "using", "use", "like", "well", "new", "one", "two",
    "three", "every", "across", "around", "based",
];

/// Surface variant → canonical term. Keys may span several words.
pub const SYNONYMS: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ecmascript", "javascript"),
    ("es6", "javascript"),
    ("ts", "typescript"),
    ("reactjs", "react"),
    ("react.js", "react"),
    ("nodejs", "node"),
    ("node.js", "node"),
    ("vuejs", "vue"),
    ("vue.js", "vue"),
    ("angularjs", "angular"),
    ("angular.js", "angular"),
    ("next.js", "nextjs"),
    ("py", "python"),
    ("python3", "python"),
    ("golang", "go"),
    ("postgres", "postgresql"),
    ("mongo", "mongodb"),
    ("k8s", "kubernetes"),
    ("amazon web services", "aws"),
    ("google cloud platform", "gcp"),
    ("google cloud", "gcp"),
    ("csharp", "c#"),
    ("c sharp", "c#"),
    ("cpp", "c++"),
    ("ci cd", "ci/cd"),
    ("cicd", "ci/cd"),
    ("continuous integration", "ci/cd"),
    ("continuous delivery", "ci/cd"),
    ("continuous deployment", "ci/cd"),
    ("restful", "rest"),
    ("rest api", "rest"),
    ("apis", "api"),
    ("db", "database"),
    ("databases", "database"),
    ("machine learning", "machine learning"),
    ("ml", "machine learning"),
    ("deep learning", "deep learning"),
    ("artificial intelligence", "ai"),
    ("data science", "data science"),
    ("natural language processing", "nlp"),
    ("llms", "llm"),
    ("large language models", "llm"),
    ("front end", "frontend"),
    ("front-end", "frontend"),
    ("back end", "backend"),
    ("back-end", "backend"),
    ("full stack", "fullstack"),
    ("full-stack", "fullstack"),
    ("test driven development", "tdd"),
    ("test-driven development", "tdd"),
    ("user experience", "ux"),
    ("user interface", "ui"),
    ("microservice", "microservices"),
    ("micro-services", "microservices"),
    ("dev ops", "devops"),
    ("unit tests", "unit testing"),
    ("unit testing", "unit testing"),
    ("project management", "project management"),
    ("agile methodology", "agile"),
    ("sql server", "sql server"),
];

/// Section label → header variants recognised for it.
pub const SECTION_HEADERS: &[(&str, &[&str])] = &[
    (
        "Summary",
        &[
            "summary",
            "professional summary",
            "career summary",
            "executive summary",
            "objective",
            "career objective",
            "profile",
            "professional profile",
            "about me",
        ],
    ),
    (
        "Experience",
        &[
            "experience",
            "work experience",
            "professional experience",
            "relevant experience",
            "employment",
            "employment history",
            "work history",
            "career history",
        ],
    ),
    (
        "Education",
        &[
            "education",
            "academic background",
            "education and training",
            "academics",
        ],
    ),
    (
        "Skills",
        &[
            "skills",
            "technical skills",
            "key skills",
            "core competencies",
            "competencies",
            "technologies",
            "skills and technologies",
            "expertise",
        ],
    ),
    (
        "Certifications",
        &[
            "certifications",
            "certificates",
            "licenses",
            "licenses and certifications",
            "certifications and licenses",
            "credentials",
        ],
    ),
    (
        "Projects",
        &[
            "projects",
            "personal projects",
            "selected projects",
            "key projects",
            "portfolio",
        ],
    ),
];

/// Words in an unrecognised header that hint at the standard label it should use.
pub const HEADER_HINTS: &[(&str, &str)] = &[
    ("about", "Summary"),
    ("objective", "Summary"),
    ("overview", "Summary"),
    ("profile", "Summary"),
    ("career", "Experience"),
    ("employment", "Experience"),
    ("history", "Experience"),
    ("jobs", "Experience"),
    ("work", "Experience"),
    ("academic", "Education"),
    ("degree", "Education"),
    ("degrees", "Education"),
    ("school", "Education"),
    ("studies", "Education"),
    ("abilities", "Skills"),
    ("skill", "Skills"),
    ("stack", "Skills"),
    ("technical", "Skills"),
    ("tools", "Skills"),
    ("toolbox", "Skills"),
    ("certified", "Certifications"),
    ("certification", "Certifications"),
    ("license", "Certifications"),
    ("project", "Projects"),
    ("builds", "Projects"),
];

pub const WEAK_PHRASES: &[&str] = &[
    "responsible for",
    "duties included",
    "worked on",
    "helped with",
    "helped to",
    "participated in",
    "assisted with",
    "assisted in",
    "involved in",
    "tasked with",
    "in charge of",
];

pub const ACTION_VERBS: &[&str] = &[
    "achieved", "administered", "analyzed", "architected", "automated", "built", "coordinated",
    "created", "decreased", "delivered", "designed", "developed", "directed", "drove",
    "engineered", "established", "executed", "generated", "grew", "implemented", "improved",
    "increased", "launched", "led", "managed", "mentored", "migrated", "optimized",
    "orchestrated", "pioneered", "reduced", "refactored", "resolved", "scaled", "shipped",
    "spearheaded", "streamlined", "supervised", "trained", "transformed",
];

/// Technical terms the spelling check must never flag.
pub const SPELLING_ALLOWLIST: &[&str] = &[
    "agile", "analytics", "android", "angular", "ansible", "api", "aws", "azure", "babel",
    "backend", "bitbucket", "cassandra", "cicd", "cloudformation", "codebase", "confluence",
    "css", "dashboard", "dashboards", "datadog", "devops", "django", "docker", "dockerized",
    "dynamodb", "elasticsearch", "fastapi", "figma", "flask", "frontend", "fullstack", "gcp",
    "github", "gitlab", "golang", "grafana", "graphql", "hadoop", "html", "hubspot", "ios",
    "javascript", "jenkins", "jira", "json", "jwt", "kafka", "kanban", "kotlin", "kpi", "kpis",
    "kubernetes", "lambda", "linux", "microservices", "mlops", "mongodb", "mysql", "nextjs",
    "nginx", "nodejs", "nosql", "npm", "numpy", "oauth", "observability", "onboarding", "okrs",
    "pandas", "paas", "pnpm", "postgres", "postgresql", "powerbi", "prometheus", "pytorch",
    "rabbitmq", "redis", "redux", "repo", "repos", "roadmap", "roadmaps", "rust", "saas",
    "salesforce", "sass", "scalability", "scalable", "scrum", "serverless", "splunk",
    "stakeholders", "svelte", "swift", "tableau", "tensorflow", "terraform", "typescript",
    "unix", "vue", "webpack", "workflow", "workflows", "xcode", "yaml", "yarn",
];

/// Known misspelling → correction. Checked regardless of capitalisation.
pub const MISSPELLINGS: &[(&str, &str)] = &[
    ("accomodate", "accommodate"),
    ("acheive", "achieve"),
    ("acheived", "achieved"),
    ("adress", "address"),
    ("begining", "beginning"),
    ("beleive", "believe"),
    ("calender", "calendar"),
    ("collegue", "colleague"),
    ("comittee", "committee"),
    ("commited", "committed"),
    ("definately", "definitely"),
    ("develope", "develop"),
    ("enviroment", "environment"),
    ("experiance", "experience"),
    ("goverment", "government"),
    ("independant", "independent"),
    ("knowlege", "knowledge"),
    ("maintainance", "maintenance"),
    ("managment", "management"),
    ("neccessary", "necessary"),
    ("noticable", "noticeable"),
    ("occured", "occurred"),
    ("occurence", "occurrence"),
    ("persue", "pursue"),
    ("profesional", "professional"),
    ("publically", "publicly"),
    ("recieve", "receive"),
    ("recomend", "recommend"),
    ("refered", "referred"),
    ("relevent", "relevant"),
    ("responsibile", "responsible"),
    ("seperate", "separate"),
    ("succesful", "successful"),
    ("sucessful", "successful"),
    ("supercede", "supersede"),
    ("teh", "the"),
    ("truely", "truly"),
    ("untill", "until"),
    ("wich", "which"),
];

/// Everyday words the spelling check accepts on top of the reference corpus,
/// stop words and every configured table.
pub const COMMON_WORDS: &[&str] = &[
    "account", "accounts", "accuracy", "accurate", "achievement", "achievements", "action",
    "active", "activities", "actual", "add", "added", "adding", "additional", "address",
    "adoption", "advanced", "agency", "agreement", "aligned", "annual", "annually", "approach",
    "architecture", "area", "areas", "assigned", "audit", "automation", "available", "award",
    "awarded", "awards", "backlog", "bank", "best", "better", "board", "brand", "budgets",
    "campaign", "campaigns", "care", "center", "certificate", "change", "changes", "chief",
    "city", "class", "clean", "client", "clients", "close", "coaching", "committee",
    "community", "companies", "complete", "completed", "complex", "compliance", "components",
    "conference", "consistent", "consulting", "content", "continuous", "contract", "contributor",
    "control", "core", "cost", "costs", "course", "coursework", "critical", "current",
    "currently", "daily", "date", "day", "days", "deadline", "deadlines", "dean", "decision",
    "decisions", "dedicated", "department", "deployment", "deployments", "description",
    "detailed", "different", "digital", "direct", "director", "documentation", "domain",
    "driven", "due", "early", "east", "effective", "efficiency", "efficient", "email",
    "employee", "employees", "end", "ended", "engagement", "enterprise", "entire", "errors",
    "event", "events", "exceeded", "existing", "expert", "external", "faster", "feature",
    "feedback", "final", "financial", "first", "focus", "focused", "following", "framework",
    "frameworks", "full", "fund", "funding", "future", "global", "goal", "goals", "graduate",
    "group", "groups", "guide", "hands", "head", "health", "hiring", "honors", "hour", "hours",
    "ideas", "impact", "important", "incident", "incidents", "industry", "information",
    "initiative", "initiatives", "innovative", "insights", "integration", "integrations",
    "interface", "internal", "intern", "internship", "inventory", "issues", "key", "language",
    "languages", "large", "last", "latency", "launch", "leading", "learning", "legacy", "less",
    "library", "line", "lines", "live", "load", "local", "logic", "long", "low", "main",
    "major", "member", "members", "methods", "metrics", "million", "minutes", "model",
    "models", "modern", "month", "monthly", "months", "national", "needs", "north", "number",
    "objectives", "offline", "online", "open", "operational", "order", "orders", "outcomes",
    "owner", "ownership", "page", "pages", "part", "partner", "partners", "patient", "patients",
    "peer", "percent", "period", "phone", "pipeline", "pipelines", "plan", "plans", "point",
    "policies", "policy", "portal", "power", "practices", "present", "president", "presentation",
    "presentations", "primary", "prior", "priorities", "production", "productivity", "program",
    "programs", "progress", "public", "quarter", "quarterly", "queries", "rate", "real",
    "record", "recruiting", "regional", "release", "releases", "reliability", "report",
    "reporting", "request", "requests", "resource", "resources", "response", "retention",
    "review", "reviews", "risk", "rollout", "school", "second", "section", "self", "server",
    "servers", "set", "several", "share", "short", "significant", "single", "site", "small",
    "solution", "source", "south", "specialist", "speed", "staff", "standard", "standards",
    "state", "states", "status", "store", "student", "students", "studio", "success",
    "successful", "successfully", "suite", "supply", "survey", "target", "targets", "task",
    "tasks", "teams", "term", "third", "thousand", "throughput", "ticket", "tickets", "top",
    "total", "traffic", "transition", "trends", "uptime", "value", "vendor", "vendors",
    "version", "volume", "week", "weekly", "weeks", "west", "world", "writing", "yearly",
    // base verbs, so stemmed forms resolve
    "achieve", "analyze", "automate", "contribute", "contributed", "coordinate", "debug",
    "deploy", "drive", "enable", "grow", "handle", "hire", "integrate", "mentor", "migrate",
    "monitor", "optimize", "own", "reduce", "refactor", "resolve", "ship", "train", "write",
    // frequent résumé nouns and adjectives
    "app", "apps", "assurance", "authentication", "authorization", "availability", "billing",
    "cache", "caching", "checkout", "churn", "conversion", "coverage", "culture", "dashboard",
    "debugging", "endpoint", "endpoints", "experiment", "experiments", "freelance", "gpa",
    "hackathon", "hybrid", "interests", "interviews", "logging", "maintainer", "manual",
    "margin", "media", "memory", "migration", "migrations", "minor", "monitoring", "native",
    "oncall", "onsite", "payment", "payments", "profit", "query", "queue", "queues",
    "ranking", "recommendation", "recommendations", "references", "relevant", "savings",
    "schema", "schemas", "search", "secure", "sessions", "social", "sprint", "sprints",
    "stakeholder", "startup", "startups", "storage", "stuff", "thing", "things", "tooling",
    "unit", "views", "visualization", "volunteer", "warehouse", "website", "websites",
];
