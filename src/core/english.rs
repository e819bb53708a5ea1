// File: src/core/english.rs
//! Built-in English assets: stop-words, a closed-class tag lexicon, base-form
//! dictionaries per word class and irregular inflections.

pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the",
    "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
    "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn",
    "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn",
    "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Word → Treebank tag for closed-class words and common ambiguous forms.
pub const LEXICON: &[(&str, &str)] = &[
    // determiners
    ("a", "DT"), ("an", "DT"), ("the", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("each", "DT"), ("every", "DT"), ("some", "DT"),
    ("any", "DT"), ("no", "DT"), ("all", "DT"), ("both", "DT"), ("either", "DT"),
    ("neither", "DT"), ("another", "DT"),
    // pronouns
    ("i", "PRP"), ("me", "PRP"), ("you", "PRP"), ("he", "PRP"), ("him", "PRP"),
    ("she", "PRP"), ("it", "PRP"), ("we", "PRP"), ("us", "PRP"), ("they", "PRP"),
    ("them", "PRP"), ("myself", "PRP"), ("yourself", "PRP"), ("himself", "PRP"),
    ("herself", "PRP"), ("itself", "PRP"), ("ourselves", "PRP"), ("themselves", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("her", "PRP$"), ("its", "PRP$"),
    ("our", "PRP$"), ("their", "PRP$"),
    // prepositions and subordinators
    ("of", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"), ("with", "IN"),
    ("about", "IN"), ("against", "IN"), ("between", "IN"), ("into", "IN"),
    ("through", "IN"), ("during", "IN"), ("before", "IN"), ("after", "IN"),
    ("above", "IN"), ("below", "IN"), ("from", "IN"), ("in", "IN"), ("on", "IN"),
    ("under", "IN"), ("over", "IN"), ("since", "IN"), ("until", "IN"), ("while", "IN"),
    ("because", "IN"), ("though", "IN"), ("although", "IN"), ("if", "IN"), ("than", "IN"),
    ("as", "IN"), ("without", "IN"), ("like", "IN"), ("up", "RP"), ("down", "RP"),
    ("out", "RP"), ("off", "RP"),
    // conjunctions
    ("and", "CC"), ("but", "CC"), ("or", "CC"), ("nor", "CC"), ("yet", "CC"),
    // modals
    ("can", "MD"), ("could", "MD"), ("will", "MD"), ("would", "MD"), ("shall", "MD"),
    ("should", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"), ("won't", "MD"),
    ("can't", "MD"), ("cannot", "MD"), ("wouldn't", "MD"), ("shouldn't", "MD"),
    ("couldn't", "MD"),
    ("to", "TO"),
    // wh-words
    ("what", "WP"), ("who", "WP"), ("whom", "WP"), ("which", "WDT"), ("whose", "WP$"),
    ("why", "WRB"), ("how", "WRB"), ("when", "WRB"), ("where", "WRB"),
    // be / have / do
    ("be", "VB"), ("is", "VBZ"), ("are", "VBP"), ("am", "VBP"), ("was", "VBD"),
    ("were", "VBD"), ("been", "VBN"), ("being", "VBG"), ("have", "VBP"), ("has", "VBZ"),
    ("had", "VBD"), ("having", "VBG"), ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"),
    ("doing", "VBG"), ("don't", "VBP"), ("doesn't", "VBZ"), ("didn't", "VBD"),
    ("isn't", "VBZ"), ("aren't", "VBP"), ("wasn't", "VBD"), ("weren't", "VBD"),
    ("haven't", "VBP"), ("hasn't", "VBZ"), ("i'm", "VBP"), ("it's", "VBZ"),
    // adverbs
    ("not", "RB"), ("n't", "RB"), ("very", "RB"), ("too", "RB"), ("just", "RB"),
    ("only", "RB"), ("also", "RB"), ("never", "RB"), ("always", "RB"), ("often", "RB"),
    ("again", "RB"), ("now", "RB"), ("then", "RB"), ("here", "RB"), ("there", "RB"),
    ("so", "RB"), ("well", "RB"), ("still", "RB"), ("even", "RB"), ("really", "RB"),
    ("quite", "RB"), ("once", "RB"), ("further", "RB"), ("soon", "RB"), ("already", "RB"),
    ("ever", "RB"), ("almost", "RB"), ("tomorrow", "NN"), ("today", "NN"), ("tonight", "NN"),
    // comparatives the suffix rules would miss
    ("more", "JJR"), ("most", "JJS"), ("less", "JJR"), ("least", "JJS"), ("better", "JJR"),
    ("best", "JJS"), ("worse", "JJR"), ("worst", "JJS"), ("few", "JJ"), ("other", "JJ"),
    ("own", "JJ"), ("same", "JJ"), ("such", "JJ"),
    // interjections
    ("lol", "UH"), ("omg", "UH"), ("wow", "UH"), ("yay", "UH"), ("ugh", "UH"), ("oh", "UH"),
    ("hey", "UH"), ("haha", "UH"), ("hahaha", "UH"), ("yes", "UH"), ("yeah", "UH"),
    ("please", "UH"), ("hi", "UH"), ("hello", "UH"), ("thanks", "NNS"),
];

pub const NOUNS: &[&str] = &[
    "day", "time", "year", "week", "weekend", "morning", "night", "evening", "life", "world",
    "people", "person", "man", "woman", "child", "friend", "family", "mom", "dad", "guy",
    "girl", "boy", "baby", "follower", "fan", "team", "game", "movie", "film", "show",
    "song", "music", "album", "book", "story", "video", "photo", "picture", "pic", "post",
    "tweet", "message", "news", "thing", "way", "place", "home", "house", "school", "work",
    "job", "office", "class", "party", "birthday", "holiday", "trip", "food", "dinner",
    "lunch", "breakfast", "coffee", "tea", "drink", "beer", "pizza", "cake", "car", "phone",
    "computer", "internet", "app", "website", "service", "product", "price", "money",
    "problem", "issue", "question", "answer", "idea", "reason", "chance", "luck", "love",
    "hate", "hope", "fun", "joy", "smile", "laugh", "tear", "pain", "heart", "mind", "head",
    "eye", "face", "hand", "foot", "tooth", "mouse", "glass", "box", "dish", "church",
    "bus", "city", "country", "sun", "rain", "weather", "summer", "winter", "spring",
    "sleep", "dream", "thanks", "thank", "welcome", "support", "help", "experience",
    "quality", "customer", "review", "account", "update", "event", "concert", "ticket",
    "minute", "hour", "month", "moment", "end", "start", "lot", "bit", "sense", "feeling",
    "mood", "heat", "cold", "headache", "exam", "test", "result", "goal", "win", "loss",
    "knife", "wife", "life", "leaf", "wolf", "half", "shelf", "story", "body", "party",
    "kiss", "hug", "gift", "present", "surprise", "mistake", "fail", "failure", "success",
];

pub const VERBS: &[&str] = &[
    "be", "have", "do", "go", "get", "make", "take", "come", "see", "know", "think", "look",
    "want", "give", "use", "find", "tell", "ask", "work", "seem", "feel", "try", "leave",
    "call", "love", "like", "hate", "enjoy", "miss", "need", "hope", "wish", "wait", "watch",
    "play", "read", "write", "listen", "hear", "say", "talk", "speak", "follow", "share",
    "post", "tweet", "thank", "help", "start", "stop", "finish", "win", "lose", "fail",
    "cry", "laugh", "smile", "sleep", "eat", "drink", "buy", "sell", "pay", "send", "receive",
    "meet", "visit", "move", "live", "die", "happen", "change", "break", "fix", "hurt",
    "worry", "care", "bother", "annoy", "ruin", "suck", "rock", "celebrate", "welcome",
    "excite", "amaze", "disappoint", "bore", "tire", "please", "surprise", "believe",
    "remember", "forget", "learn", "study", "teach", "open", "close", "run", "walk", "drive",
    "travel", "sit", "stand", "begin", "keep", "let", "put", "bring", "hold", "turn", "show",
    "feed", "plan", "stay", "spend", "save", "apply", "reply", "carry", "study", "hug",
    "kiss", "shop", "chat", "dance", "sing", "cook", "clean", "rain", "snow", "die", "lie",
];

pub const ADJECTIVES: &[&str] = &[
    "good", "bad", "great", "nice", "happy", "sad", "awesome", "amazing", "terrible",
    "horrible", "awful", "excellent", "wonderful", "beautiful", "lovely", "cute", "sweet",
    "cool", "hot", "cold", "warm", "funny", "boring", "interesting", "exciting", "excited",
    "tired", "sick", "ill", "angry", "mad", "upset", "glad", "sorry", "lucky", "unlucky",
    "poor", "rich", "new", "old", "young", "big", "small", "little", "large", "long", "short",
    "high", "low", "fast", "slow", "easy", "hard", "difficult", "simple", "early", "late",
    "free", "busy", "ready", "sure", "right", "wrong", "true", "false", "real", "fine",
    "perfect", "fantastic", "brilliant", "fabulous", "favourite", "favorite", "best",
    "worst", "ugly", "stupid", "dumb", "smart", "clever", "kind", "friendly", "rude",
    "lonely", "alone", "scared", "afraid", "worried", "nervous", "proud", "thankful",
    "grateful", "bored", "hungry", "full", "empty", "broken", "dead", "alive", "safe",
    "crazy", "weird", "strange", "fun", "serious", "important", "special", "different",
    "pretty", "gorgeous", "adorable", "disappointed", "disappointing", "annoying",
    "annoyed", "useless", "useful", "helpful", "pleased", "unhappy", "miserable",
    "depressed", "positive", "negative", "fresh", "dark", "bright", "loud", "quiet",
    "wet", "dry", "cheap", "expensive", "healthy", "tasty", "delicious", "lame", "nasty",
];

pub const ADVERBS: &[&str] = &[
    "not", "very", "too", "just", "only", "also", "never", "always", "often", "again", "now",
    "then", "here", "there", "so", "well", "still", "even", "really", "quite", "soon",
    "already", "ever", "almost", "maybe", "probably", "definitely", "finally", "actually",
    "seriously", "totally", "absolutely", "literally", "hopefully", "unfortunately",
    "sadly", "happily", "badly", "truly", "completely", "extremely", "pretty", "rather",
    "away", "back", "together", "later", "yesterday", "tomorrow", "today", "tonight",
];

pub const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"), ("men", "man"), ("women", "woman"), ("feet", "foot"),
    ("teeth", "tooth"), ("mice", "mouse"), ("geese", "goose"), ("lives", "life"),
    ("wives", "wife"), ("knives", "knife"), ("leaves", "leaf"), ("wolves", "wolf"),
    ("halves", "half"), ("shelves", "shelf"), ("oxen", "ox"), ("data", "datum"),
];

pub const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("being", "be"), ("has", "have"), ("had", "have"), ("having", "have"), ("does", "do"),
    ("did", "do"), ("done", "do"), ("went", "go"), ("gone", "go"), ("goes", "go"),
    ("got", "get"), ("gotten", "get"), ("made", "make"), ("took", "take"),
    ("taken", "take"), ("came", "come"), ("saw", "see"), ("seen", "see"), ("knew", "know"),
    ("known", "know"), ("thought", "think"), ("gave", "give"), ("given", "give"),
    ("found", "find"), ("told", "tell"), ("felt", "feel"), ("left", "leave"),
    ("said", "say"), ("heard", "hear"), ("spoke", "speak"), ("spoken", "speak"),
    ("won", "win"), ("lost", "lose"), ("ate", "eat"), ("eaten", "eat"), ("drank", "drink"),
    ("drunk", "drink"), ("bought", "buy"), ("sold", "sell"), ("paid", "pay"),
    ("sent", "send"), ("met", "meet"), ("broke", "break"), ("broken", "break"),
    ("hurt", "hurt"), ("forgot", "forget"), ("forgotten", "forget"), ("taught", "teach"),
    ("ran", "run"), ("drove", "drive"), ("driven", "drive"), ("sat", "sit"),
    ("stood", "stand"), ("began", "begin"), ("begun", "begin"), ("kept", "keep"),
    ("brought", "bring"), ("held", "hold"), ("fed", "feed"), ("spent", "spend"),
    ("wrote", "write"), ("written", "write"), ("read", "read"), ("sang", "sing"),
    ("sung", "sing"), ("slept", "sleep"), ("lay", "lie"), ("lying", "lie"), ("dying", "die"),
];

pub const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
    ("further", "far"), ("farther", "far"), ("furthest", "far"), ("farthest", "far"),
    ("elder", "old"), ("eldest", "old"),
];
