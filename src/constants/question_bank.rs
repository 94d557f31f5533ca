//! Authored quiz content, five questions per subject and tier.

use crate::models::domain::{Difficulty, QuestionRecord, Subject, SubjectQuestions};

/// Every subject bank in classifier priority order.
pub static QUESTION_BANK: &[SubjectQuestions] = &[
    MATH_QUESTIONS,
    SCIENCE_QUESTIONS,
    HISTORY_QUESTIONS,
    ENGLISH_QUESTIONS,
    CS_QUESTIONS,
];

pub const MATH_QUESTIONS: SubjectQuestions = SubjectQuestions {
    subject: Subject::Math,
    tiers: &[
        (
            Difficulty::Easy,
            &[
                QuestionRecord::new(
                    "What is 7 + 8?",
                    &["15", "16", "14", "17"],
                    0,
                    "Add the two numbers: 7 + 8 = 15",
                ),
                QuestionRecord::new(
                    "What is 12 - 5?",
                    &["7", "8", "6", "9"],
                    0,
                    "Subtract: 12 - 5 = 7",
                ),
                QuestionRecord::new(
                    "What is 3 x 4?",
                    &["12", "7", "15", "10"],
                    0,
                    "Multiply: 3 x 4 = 12",
                ),
                QuestionRecord::new(
                    "What is 20 / 4?",
                    &["5", "4", "6", "8"],
                    0,
                    "Divide: 20 / 4 = 5",
                ),
                QuestionRecord::new(
                    "What is 50% of 100?",
                    &["50", "25", "75", "100"],
                    0,
                    "50% means half, so 100 / 2 = 50",
                ),
            ],
        ),
        (
            Difficulty::Medium,
            &[
                QuestionRecord::new(
                    "What is 15 x 12?",
                    &["180", "170", "190", "200"],
                    0,
                    "15 x 12 = (15 x 10) + (15 x 2) = 150 + 30 = 180",
                ),
                QuestionRecord::new(
                    "What is 144 / 12?",
                    &["12", "10", "14", "11"],
                    0,
                    "144 / 12 = 12 (think: 12 x 12 = 144)",
                ),
                QuestionRecord::new(
                    "What is 3^3 (3 cubed)?",
                    &["27", "9", "18", "36"],
                    0,
                    "3^3 = 3 x 3 x 3 = 27",
                ),
                QuestionRecord::new(
                    "Solve: 2x + 5 = 15. What is x?",
                    &["5", "10", "7", "8"],
                    0,
                    "2x + 5 = 15, subtract 5: 2x = 10, divide by 2: x = 5",
                ),
                QuestionRecord::new(
                    "What is the area of a rectangle 8cm x 5cm?",
                    &["40 cm²", "13 cm²", "20 cm²", "25 cm²"],
                    0,
                    "Area = length x width = 8 x 5 = 40 cm²",
                ),
            ],
        ),
        (
            Difficulty::Hard,
            &[
                QuestionRecord::new(
                    "What is the quadratic formula?",
                    &["x = (-b ± √(b²-4ac)) / 2a", "x = b² - 4ac", "x = -b / 2a", "x = √(b²-4ac)"],
                    0,
                    "The quadratic formula solves ax² + bx + c = 0",
                ),
                QuestionRecord::new(
                    "Solve: 3x² - 12x = 0",
                    &["x = 0 or x = 4", "x = 4", "x = 0", "x = 12"],
                    0,
                    "Factor: 3x(x - 4) = 0, so x = 0 or x = 4",
                ),
                QuestionRecord::new(
                    "What is sin(30°)?",
                    &["0.5 or 1/2", "0.707", "0.866", "1"],
                    0,
                    "sin(30°) = 1/2 or 0.5 (common angle to memorize)",
                ),
                QuestionRecord::new(
                    "If f(x) = 2x + 3, what is f(5)?",
                    &["13", "10", "8", "15"],
                    0,
                    "Substitute: f(5) = 2(5) + 3 = 10 + 3 = 13",
                ),
                QuestionRecord::new(
                    "What is the derivative of x²?",
                    &["2x", "x²", "x", "2x²"],
                    0,
                    "Power rule: d/dx(x^n) = nx^(n-1), so d/dx(x²) = 2x",
                ),
            ],
        ),
    ],
};

pub const SCIENCE_QUESTIONS: SubjectQuestions = SubjectQuestions {
    subject: Subject::Science,
    tiers: &[
        (
            Difficulty::Easy,
            &[
                QuestionRecord::new(
                    "What is H2O commonly known as?",
                    &["Water", "Oxygen", "Hydrogen", "Carbon"],
                    0,
                    "H2O is the chemical formula for water (2 hydrogen + 1 oxygen)",
                ),
                QuestionRecord::new(
                    "What planet is closest to the Sun?",
                    &["Mercury", "Venus", "Earth", "Mars"],
                    0,
                    "Mercury is the first and closest planet to the Sun",
                ),
                QuestionRecord::new(
                    "True or False: Plants make their own food through photosynthesis.",
                    &["True", "False"],
                    0,
                    "Plants use sunlight, water, and CO2 to create glucose (sugar) through photosynthesis",
                ),
                QuestionRecord::new(
                    "What gas do humans breathe in?",
                    &["Oxygen", "Carbon Dioxide", "Nitrogen", "Helium"],
                    0,
                    "Humans breathe in oxygen (O2) and breathe out carbon dioxide (CO2)",
                ),
                QuestionRecord::new(
                    "What is the center of an atom called?",
                    &["Nucleus", "Electron", "Proton", "Neutron"],
                    0,
                    "The nucleus is the dense center of an atom, containing protons and neutrons",
                ),
            ],
        ),
        (
            Difficulty::Medium,
            &[
                QuestionRecord::new(
                    "What is the speed of light?",
                    &["299,792 km/s", "150,000 km/s", "500,000 km/s", "100,000 km/s"],
                    0,
                    "Speed of light is approximately 300,000 km/s or 186,000 miles/s",
                ),
                QuestionRecord::new(
                    "What is the powerhouse of the cell?",
                    &["Mitochondria", "Nucleus", "Ribosome", "Chloroplast"],
                    0,
                    "Mitochondria produce ATP (energy) for the cell through cellular respiration",
                ),
                QuestionRecord::new(
                    "What is Newton's Second Law?",
                    &["F = ma", "E = mc²", "F = G(m1m2)/r²", "V = IR"],
                    0,
                    "Force equals mass times acceleration (F = ma)",
                ),
                QuestionRecord::new(
                    "What is the pH of pure water?",
                    &["7", "0", "14", "10"],
                    0,
                    "Pure water is neutral with a pH of 7 (neither acidic nor basic)",
                ),
                QuestionRecord::new(
                    "What are the three states of matter?",
                    &["Solid, Liquid, Gas", "Hot, Cold, Warm", "Big, Medium, Small", "Fast, Slow, Still"],
                    0,
                    "The three common states are solid, liquid, and gas (plasma is the 4th)",
                ),
            ],
        ),
        (
            Difficulty::Hard,
            &[
                QuestionRecord::new(
                    "What is the first law of thermodynamics?",
                    &["Energy cannot be created or destroyed", "Entropy always increases", "For every action there's a reaction", "Objects in motion stay in motion"],
                    0,
                    "Energy conservation: energy can only be transferred or transformed, not created/destroyed",
                ),
                QuestionRecord::new(
                    "What is DNA composed of?",
                    &["Nucleotides", "Amino acids", "Lipids", "Carbohydrates"],
                    0,
                    "DNA is made of nucleotides, each with a sugar, phosphate, and nitrogenous base",
                ),
                QuestionRecord::new(
                    "What is Avogadro's number?",
                    &["6.022 x 10²³", "3.14", "9.8", "1.6 x 10⁻¹⁹"],
                    0,
                    "Avogadro's number is the number of particles in one mole of a substance",
                ),
                QuestionRecord::new(
                    "What is the process of cell division called?",
                    &["Mitosis and Meiosis", "Photosynthesis", "Respiration", "Diffusion"],
                    0,
                    "Mitosis creates identical cells; meiosis creates sex cells with half the chromosomes",
                ),
                QuestionRecord::new(
                    "What is Ohm's Law?",
                    &["V = IR", "F = ma", "E = mc²", "P = IV"],
                    0,
                    "Voltage equals current times resistance (V = IR)",
                ),
            ],
        ),
    ],
};

pub const HISTORY_QUESTIONS: SubjectQuestions = SubjectQuestions {
    subject: Subject::History,
    tiers: &[
        (
            Difficulty::Easy,
            &[
                QuestionRecord::new(
                    "In what year did World War II end?",
                    &["1945", "1918", "1939", "1950"],
                    0,
                    "WWII ended in 1945 with Germany's surrender in May and Japan's in September",
                ),
                QuestionRecord::new(
                    "Who was the first President of the United States?",
                    &["George Washington", "Thomas Jefferson", "Abraham Lincoln", "John Adams"],
                    0,
                    "George Washington served 1789-1797 as the first U.S. President",
                ),
                QuestionRecord::new(
                    "What year did Columbus reach the Americas?",
                    &["1492", "1776", "1620", "1500"],
                    0,
                    "Columbus reached the Americas in 1492 (remember: In 1492, Columbus sailed the ocean blue)",
                ),
                QuestionRecord::new(
                    "What ancient civilization built the pyramids?",
                    &["Egyptians", "Romans", "Greeks", "Aztecs"],
                    0,
                    "Ancient Egyptians built the pyramids as tombs for pharaohs around 2500 BCE",
                ),
                QuestionRecord::new(
                    "True or False: The Great Wall of China was built to keep out invaders.",
                    &["True", "False"],
                    0,
                    "The Great Wall was built primarily for defense against northern invasions",
                ),
            ],
        ),
        (
            Difficulty::Medium,
            &[
                QuestionRecord::new(
                    "What year did the American Civil War start?",
                    &["1861", "1776", "1812", "1865"],
                    0,
                    "The Civil War began in 1861 and ended in 1865",
                ),
                QuestionRecord::new(
                    "Who wrote the Declaration of Independence?",
                    &["Thomas Jefferson", "George Washington", "Benjamin Franklin", "John Adams"],
                    0,
                    "Thomas Jefferson was the primary author of the Declaration in 1776",
                ),
                QuestionRecord::new(
                    "What was the Renaissance?",
                    &["Cultural rebirth in Europe", "A war", "A plague", "A religion"],
                    0,
                    "The Renaissance (14th-17th century) was a period of cultural and artistic revival",
                ),
                QuestionRecord::new(
                    "What empire did Julius Caesar lead?",
                    &["Roman Empire", "Greek Empire", "Persian Empire", "Ottoman Empire"],
                    0,
                    "Julius Caesar was a Roman general and statesman in the 1st century BCE",
                ),
                QuestionRecord::new(
                    "What was the Cold War?",
                    &["Political tension between US and USSR", "A literal cold war", "WWI", "WWII"],
                    0,
                    "The Cold War (1947-1991) was ideological tension without direct military conflict",
                ),
            ],
        ),
        (
            Difficulty::Hard,
            &[
                QuestionRecord::new(
                    "What year did the French Revolution begin?",
                    &["1789", "1776", "1815", "1804"],
                    0,
                    "The French Revolution started in 1789 with the storming of the Bastille",
                ),
                QuestionRecord::new(
                    "Who was the first person to circumnavigate the globe?",
                    &["Ferdinand Magellan's crew", "Christopher Columbus", "Vasco da Gama", "Marco Polo"],
                    0,
                    "Magellan's expedition (1519-1522) first circumnavigated; Magellan died during the journey",
                ),
                QuestionRecord::new(
                    "What was the Magna Carta?",
                    &["Document limiting king's power", "A trade agreement", "A religious text", "A war treaty"],
                    0,
                    "The Magna Carta (1215) established that the king was subject to law",
                ),
                QuestionRecord::new(
                    "What caused the fall of the Roman Empire?",
                    &["Multiple factors (economic, military, political)", "One battle", "Natural disaster", "Disease only"],
                    0,
                    "The fall was gradual due to economic troubles, invasions, and internal decay",
                ),
                QuestionRecord::new(
                    "What was the Treaty of Versailles?",
                    &["Peace treaty ending WWI", "Treaty ending WWII", "Trade agreement", "Military alliance"],
                    0,
                    "The Treaty of Versailles (1919) officially ended WWI and imposed harsh terms on Germany",
                ),
            ],
        ),
    ],
};

pub const ENGLISH_QUESTIONS: SubjectQuestions = SubjectQuestions {
    subject: Subject::English,
    tiers: &[
        (
            Difficulty::Easy,
            &[
                QuestionRecord::new(
                    "What is a noun?",
                    &["A person, place, or thing", "An action word", "A describing word", "A connecting word"],
                    0,
                    "Nouns name people (teacher), places (school), or things (book)",
                ),
                QuestionRecord::new(
                    "What is a verb?",
                    &["An action word", "A person, place, or thing", "A describing word", "A connecting word"],
                    0,
                    "Verbs show action (run, jump) or state of being (is, are)",
                ),
                QuestionRecord::new(
                    "Which is the correct spelling?",
                    &["Definitely", "Definately", "Definetly", "Definitly"],
                    0,
                    "Definitely is spelled with 'finite' in the middle (de-finite-ly)",
                ),
                QuestionRecord::new(
                    "What is an adjective?",
                    &["A describing word", "An action word", "A person, place, or thing", "A connecting word"],
                    0,
                    "Adjectives describe nouns (big dog, happy child, red car)",
                ),
                QuestionRecord::new(
                    "Complete: She _____ to the store yesterday.",
                    &["went", "go", "goes", "going"],
                    0,
                    "Past tense of 'go' is 'went' (yesterday indicates past tense)",
                ),
            ],
        ),
        (
            Difficulty::Medium,
            &[
                QuestionRecord::new(
                    "What is a metaphor?",
                    &["Comparison without like/as", "Comparison with like/as", "Exaggeration", "Sound words"],
                    0,
                    "Metaphor: direct comparison (He is a lion). Simile uses like/as (He is like a lion)",
                ),
                QuestionRecord::new(
                    "Which sentence is correct?",
                    &["Their going to the park", "They're going to the park", "There going to the park", "Thier going to the park"],
                    1,
                    "They're = they are. Their = possession. There = location",
                ),
                QuestionRecord::new(
                    "What is alliteration?",
                    &["Repetition of initial sounds", "Repetition of vowels", "Rhyming words", "Exaggeration"],
                    0,
                    "Alliteration: repeated consonant sounds at word beginnings (Peter Piper picked)",
                ),
                QuestionRecord::new(
                    "What is the subject in: 'The cat chased the mouse'?",
                    &["The cat", "chased", "the mouse", "The cat chased"],
                    0,
                    "The subject is who/what does the action (the cat is doing the chasing)",
                ),
                QuestionRecord::new(
                    "What is irony?",
                    &["Opposite of expectation", "A comparison", "Repetition", "Rhyming"],
                    0,
                    "Irony is when the opposite of what's expected happens or is said",
                ),
            ],
        ),
        (
            Difficulty::Hard,
            &[
                QuestionRecord::new(
                    "What is a dangling modifier?",
                    &["Modifier not clearly related to subject", "A comma error", "A spelling error", "A verb tense error"],
                    0,
                    "Example: 'Walking to school, the bus passed me' - who was walking is unclear",
                ),
                QuestionRecord::new(
                    "What is parallelism?",
                    &["Similar grammatical structure", "Similar meaning", "Similar sound", "Similar length"],
                    0,
                    "Parallelism uses similar structures (I like reading, writing, and hiking)",
                ),
                QuestionRecord::new(
                    "What is the subjunctive mood?",
                    &["Expressing wishes/hypotheticals", "Past tense", "Future tense", "Commands"],
                    0,
                    "Subjunctive: 'If I were rich' (not 'was'), 'I suggest he go' (not 'goes')",
                ),
                QuestionRecord::new(
                    "What is a gerund?",
                    &["Verb ending in -ing used as noun", "Past tense verb", "Adjective", "Adverb"],
                    0,
                    "Gerund: verb as noun (Swimming is fun, I enjoy reading)",
                ),
                QuestionRecord::new(
                    "What is the Oxford comma?",
                    &["Comma before 'and' in lists", "Comma after introduction", "Comma in dates", "Comma in addresses"],
                    0,
                    "Oxford comma: 'red, white, and blue' (comma before 'and')",
                ),
            ],
        ),
    ],
};

pub const CS_QUESTIONS: SubjectQuestions = SubjectQuestions {
    subject: Subject::ComputerScience,
    tiers: &[
        (
            Difficulty::Easy,
            &[
                QuestionRecord::new(
                    "What is a variable in programming?",
                    &["A container for storing data", "A type of loop", "A function", "An error"],
                    0,
                    "Variables store values that can be used and changed throughout your program (e.g., x = 5)",
                ),
                QuestionRecord::new(
                    "What does HTML stand for?",
                    &["HyperText Markup Language", "High Tech Modern Language", "Home Tool Markup Language", "Hyperlinks and Text Markup Language"],
                    0,
                    "HTML is the standard markup language for creating web pages",
                ),
                QuestionRecord::new(
                    "What is a loop used for?",
                    &["Repeating code multiple times", "Storing data", "Creating functions", "Fixing errors"],
                    0,
                    "Loops execute code repeatedly, like a for loop or while loop",
                ),
                QuestionRecord::new(
                    "True or False: Python uses indentation to define code blocks.",
                    &["True", "False"],
                    0,
                    "Python uses whitespace/indentation instead of braces {} to structure code",
                ),
                QuestionRecord::new(
                    "What is binary?",
                    &["Base-2 number system (0s and 1s)", "A programming language", "A type of variable", "Computer hardware"],
                    0,
                    "Binary uses only 0 and 1 to represent all data in computers",
                ),
            ],
        ),
        (
            Difficulty::Medium,
            &[
                QuestionRecord::new(
                    "What is the output of: print(5 == 5)?",
                    &["True", "False", "5", "Error"],
                    0,
                    "The == operator checks equality, 5 equals 5, so it returns True",
                ),
                QuestionRecord::new(
                    "What is an array/list?",
                    &["Collection of items in order", "A single value", "A function", "A loop"],
                    0,
                    "Arrays/lists store multiple values in a single variable (e.g., [1, 2, 3, 4])",
                ),
                QuestionRecord::new(
                    "What does API stand for?",
                    &["Application Programming Interface", "Advanced Programming Integration", "Automated Program Instruction", "Applied Program Interface"],
                    0,
                    "APIs allow different software applications to communicate with each other",
                ),
                QuestionRecord::new(
                    "What is the purpose of a function?",
                    &["Reusable block of code", "Store data", "Create loops", "Define variables"],
                    0,
                    "Functions group code into reusable blocks that can be called multiple times",
                ),
                QuestionRecord::new(
                    "What is Git used for?",
                    &["Version control", "Writing code", "Running programs", "Designing websites"],
                    0,
                    "Git tracks changes in code and enables collaboration among developers",
                ),
            ],
        ),
        (
            Difficulty::Hard,
            &[
                QuestionRecord::new(
                    "What is Big O notation?",
                    &["Describes algorithm efficiency", "A programming language", "A data structure", "A debugging tool"],
                    0,
                    "Big O describes time/space complexity (e.g., O(n), O(log n), O(n²))",
                ),
                QuestionRecord::new(
                    "What is recursion?",
                    &["Function that calls itself", "A type of loop", "An error handling method", "A variable type"],
                    0,
                    "Recursion is when a function calls itself to solve problems (e.g., calculating factorials)",
                ),
                QuestionRecord::new(
                    "What is the difference between stack and heap memory?",
                    &["Stack is for local variables, heap for dynamic allocation", "Stack is slower than heap", "They are the same", "Stack is for objects only"],
                    0,
                    "Stack: automatic, local scope, fast. Heap: manual, global scope, slower but flexible",
                ),
                QuestionRecord::new(
                    "What is object-oriented programming (OOP)?",
                    &["Programming using objects and classes", "Programming without functions", "Low-level programming", "Web development only"],
                    0,
                    "OOP organizes code into objects with properties and methods (encapsulation, inheritance, polymorphism)",
                ),
                QuestionRecord::new(
                    "What is time complexity of binary search?",
                    &["O(log n)", "O(n)", "O(n²)", "O(1)"],
                    0,
                    "Binary search divides the search space in half each time, resulting in logarithmic time complexity",
                ),
            ],
        ),
    ],
};
