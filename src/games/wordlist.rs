//! Bundled dictionary for the word game: a curated set of common English
//! words, uppercase, three letters or longer. Engines load it into a
//! `HashSet` once so membership checks stay O(1) on the hot path.

pub static WORDS: &[&str] = &[
  "ACE", "ACHE", "ACID", "ACORN", "ACRE", "ACT", "ACTOR", "ADD",
  "ADOBE", "ADOPT", "AGE", "AGENT", "AGO", "AID", "AIM", "AIR",
  "AISLE", "ALARM", "ALE", "ALERT", "ALIEN", "ALIKE", "ALIVE", "ALL",
  "ALLEY", "ALLOW", "ALONE", "ALONG", "ALOUD", "ALTER", "AMBER", "AMEND",
  "AMID", "AMPLE", "AND", "ANGEL", "ANGER", "ANGLE", "ANKLE", "ANT",
  "ANTHEM", "ANY", "APART", "APE", "APPLE", "APPLY", "APRON", "APT",
  "ARC", "ARCH", "ARE", "AREA", "ARENA", "ARGUE", "ARISE", "ARM",
  "ARMOR", "AROMA", "ARROW", "ART", "ASH", "ASIDE", "ASK", "ASPEN",
  "ATE", "ATLAS", "ATOM", "ATTIC", "AUDIO", "AUNT", "AUTO", "AWAKE",
  "AWARD", "AWARE", "AWFUL", "AXE", "AXIS", "BABY", "BACK", "BACON",
  "BAD", "BADGE", "BAG", "BAKE", "BAKER", "BALD", "BALE", "BALL",
  "BAN", "BAND", "BANK", "BAR", "BARE", "BARGE", "BARK", "BARN",
  "BASE", "BASIC", "BASIL", "BASIN", "BASIS", "BAT", "BATCH", "BATH",
  "BATON", "BEACH", "BEAD", "BEAM", "BEAN", "BEAR", "BEARD", "BEAST",
  "BEAT", "BED", "BEE", "BEECH", "BEEF", "BEEN", "BEER", "BEET",
  "BEGAN", "BEGIN", "BEING", "BELL", "BELLY", "BELOW", "BELT", "BENCH",
  "BEND", "BENT", "BERRY", "BEST", "BET", "BETA", "BIAS", "BID",
  "BIG", "BIKE", "BIN", "BIND", "BIRCH", "BIRD", "BIRTH", "BIT",
  "BITE", "BLACK", "BLADE", "BLAME", "BLAND", "BLANK", "BLAST", "BLAZE",
  "BLEAK", "BLEND", "BLESS", "BLIND", "BLINK", "BLISS", "BLOCK", "BLOND",
  "BLOOD", "BLOOM", "BLOW", "BLUE", "BLUFF", "BLUNT", "BLUR", "BOARD",
  "BOAST", "BOAT", "BODY", "BOIL", "BOLD", "BOLT", "BOMB", "BOND",
  "BONE", "BONUS", "BOOK", "BOOM", "BOOST", "BOOT", "BOOTH", "BORE",
  "BORN", "BOSS", "BOTH", "BOUND", "BOW", "BOWL", "BOX", "BOY",
  "BRAID", "BRAIN", "BRAKE", "BRAN", "BRAND", "BRASS", "BRAVE", "BREAD",
  "BREAK", "BREED", "BREW", "BRICK", "BRIDE", "BRIEF", "BRIM", "BRING",
  "BRINK", "BRISK", "BROAD", "BROIL", "BROKE", "BROOK", "BROOM", "BROTH",
  "BROW", "BROWN", "BRUSH", "BUD", "BUDGE", "BUG", "BUILD", "BULB",
  "BULK", "BULL", "BUMP", "BUN", "BUNCH", "BURN", "BURST", "BUS",
  "BUSH", "BUSY", "BUT", "BUY", "BUYER", "CAB", "CABIN", "CABLE",
  "CAGE", "CAKE", "CALF", "CALL", "CALM", "CAME", "CAMEL", "CAMP",
  "CAN", "CANAL", "CANDY", "CANE", "CANOE", "CAP", "CAPE", "CAR",
  "CARD", "CARE", "CARGO", "CART", "CARVE", "CASE", "CASH", "CAST",
  "CAT", "CATCH", "CAUSE", "CAVE", "CEASE", "CEDAR", "CELL", "CENT",
  "CHAIN", "CHAIR", "CHALK", "CHAMP", "CHANT", "CHAOS", "CHARM", "CHART",
  "CHASE", "CHAT", "CHEAP", "CHEAT", "CHECK", "CHEEK", "CHEER", "CHEF",
  "CHESS", "CHEST", "CHEW", "CHIEF", "CHILD", "CHILL", "CHIN", "CHIP",
  "CHOIR", "CHOP", "CHORD", "CHOSE", "CHUNK", "CITE", "CITY", "CIVIC",
  "CIVIL", "CLAD", "CLAIM", "CLAM", "CLAMP", "CLAN", "CLAP", "CLASH",
  "CLASP", "CLASS", "CLAW", "CLAY", "CLEAN", "CLEAR", "CLERK", "CLICK",
  "CLIFF", "CLIMB", "CLING", "CLIP", "CLOAK", "CLOCK", "CLONE", "CLOSE",
  "CLOTH", "CLOUD", "CLOWN", "CLUB", "CLUE", "COACH", "COAL", "COAST",
  "COAT", "CODE", "COIL", "COIN", "COLD", "COLT", "COMB", "COME",
  "COMET", "COMIC", "CONE", "COOK", "COOL", "COPE", "COPY", "CORAL",
  "CORD", "CORE", "CORN", "COST", "COT", "COUCH", "COUGH", "COUNT",
  "COURT", "COVE", "COVER", "COW", "CRAB", "CRACK", "CRAFT", "CRANE",
  "CRASH", "CRATE", "CRAVE", "CRAWL", "CRAZE", "CREAM", "CREEK", "CREST",
  "CREW", "CRIB", "CRIME", "CRISP", "CROP", "CROSS", "CROW", "CROWD",
  "CROWN", "CRUDE", "CRUEL", "CRUMB", "CRUSH", "CRUST", "CUB", "CUBE",
  "CUE", "CUP", "CURB", "CURE", "CURL", "CURVE", "CUT", "CUTE",
  "CYCLE", "DAILY", "DAIRY", "DAISY", "DAM", "DANCE", "DARE", "DARK",
  "DART", "DASH", "DATA", "DATE", "DAWN", "DAY", "DEAD", "DEAL",
  "DEAN", "DEAR", "DEBT", "DECAY", "DECK", "DEED", "DEEP", "DEER",
  "DELAY", "DELTA", "DEN", "DENSE", "DENT", "DEPTH", "DESK", "DEVIL",
  "DEW", "DIAL", "DICE", "DID", "DIE", "DIET", "DIG", "DIGIT",
  "DIM", "DIME", "DINE", "DIP", "DIRT", "DISC", "DISH", "DITCH",
  "DIVE", "DOCK", "DODGE", "DOE", "DOG", "DOLL", "DOME", "DONE",
  "DONOR", "DOOR", "DOSE", "DOT", "DOUBT", "DOUGH", "DOVE", "DOWN",
  "DOZEN", "DRAFT", "DRAG", "DRAIN", "DRAMA", "DRANK", "DRAPE", "DRAW",
  "DREAD", "DREAM", "DRESS", "DREW", "DRIED", "DRIFT", "DRILL", "DRINK",
  "DRIP", "DRIVE", "DROP", "DROVE", "DRUM", "DRY", "DUCK", "DUE",
  "DUET", "DUG", "DULL", "DUNE", "DUSK", "DUST", "DUTY", "DWARF",
  "DWELL", "DYE", "EACH", "EAGER", "EAGLE", "EAR", "EARL", "EARLY",
  "EARN", "EARTH", "EASE", "EAST", "EASY", "EAT", "EATEN", "ECHO",
  "EDGE", "EDIT", "EEL", "EGG", "EGO", "EIGHT", "ELBOW", "ELDER",
  "ELECT", "ELITE", "ELK", "ELM", "ELSE", "EMPTY", "END", "ENEMY",
  "ENJOY", "ENTER", "ENTRY", "EQUAL", "ERA", "ERASE", "ERROR", "ESSAY",
  "EVE", "EVEN", "EVENT", "EVER", "EVERY", "EVIL", "EXACT", "EXAM",
  "EXILE", "EXIST", "EXIT", "EXTRA", "EYE", "FABLE", "FACE", "FACT",
  "FADE", "FAIL", "FAINT", "FAIR", "FAITH", "FAKE", "FALL", "FALSE",
  "FAME", "FAN", "FANCY", "FAR", "FARM", "FAST", "FAT", "FATAL",
  "FATE", "FAULT", "FAVOR", "FEAR", "FEAST", "FEAT", "FED", "FEE",
  "FEED", "FEEL", "FEET", "FELL", "FELT", "FENCE", "FERN", "FERRY",
  "FETCH", "FEVER", "FEW", "FIBER", "FIELD", "FIERY", "FIFTH", "FIFTY",
  "FIG", "FIGHT", "FILE", "FILL", "FILM", "FINAL", "FIND", "FINE",
  "FIRE", "FIRM", "FIRST", "FISH", "FIST", "FIT", "FIVE", "FIX",
  "FLAG", "FLAIR", "FLAKE", "FLAME", "FLANK", "FLAP", "FLARE", "FLASH",
  "FLASK", "FLAT", "FLAW", "FLEA", "FLED", "FLEE", "FLEET", "FLESH",
  "FLEW", "FLIP", "FLOAT", "FLOCK", "FLOOD", "FLOOR", "FLOUR", "FLOW",
  "FLOWN", "FLU", "FLUID", "FLUSH", "FLUTE", "FLY", "FOAM", "FOCAL",
  "FOCUS", "FOE", "FOG", "FOIL", "FOLD", "FOLK", "FOND", "FONT",
  "FOOD", "FOOL", "FOOT", "FOR", "FORCE", "FORGE", "FORK", "FORM",
  "FORT", "FORTH", "FORTY", "FORUM", "FOUND", "FOUR", "FOX", "FRAIL",
  "FRAME", "FRAUD", "FREE", "FRESH", "FRIED", "FROG", "FROM", "FRONT",
  "FROST", "FROWN", "FROZE", "FRUIT", "FUDGE", "FUEL", "FULL", "FUME",
  "FUN", "FUND", "FUNNY", "FUR", "FURY", "FUSE", "GAIN", "GAME",
  "GAP", "GAS", "GATE", "GAUGE", "GAVE", "GAZE", "GEAR", "GEM",
  "GENE", "GET", "GHOST", "GIANT", "GIFT", "GILL", "GIVE", "GIVEN",
  "GLAD", "GLAND", "GLARE", "GLASS", "GLAZE", "GLEAM", "GLIDE", "GLOBE",
  "GLOOM", "GLORY", "GLOSS", "GLOVE", "GLOW", "GLUE", "GOAL", "GOAT",
  "GOES", "GOLD", "GONE", "GOOD", "GOOSE", "GOT", "GOWN", "GRAB",
  "GRACE", "GRADE", "GRAIN", "GRAND", "GRANT", "GRAPE", "GRAPH", "GRASP",
  "GRASS", "GRAVE", "GRAY", "GRAZE", "GREAT", "GREED", "GREEN", "GREET",
  "GREW", "GRID", "GRIEF", "GRILL", "GRIM", "GRIN", "GRIND", "GRIP",
  "GROAN", "GROIN", "GROSS", "GROUP", "GROVE", "GROW", "GROWL", "GROWN",
  "GUARD", "GUESS", "GUEST", "GUIDE", "GUILD", "GUILT", "GULF", "GUM",
  "GUN", "GUST", "GUT", "GUY", "HABIT", "HAD", "HAIL", "HAIR",
  "HALF", "HALL", "HALT", "HAM", "HAND", "HANDY", "HANG", "HAPPY",
  "HARD", "HARM", "HARSH", "HAS", "HASTE", "HAT", "HATCH", "HATE",
  "HAUL", "HAVE", "HAVEN", "HAWK", "HAY", "HAZE", "HEAD", "HEAL",
  "HEAP", "HEAR", "HEARD", "HEART", "HEAT", "HEAVY", "HEDGE", "HEEL",
  "HEIR", "HELD", "HELLO", "HELM", "HELP", "HEN", "HENCE", "HER",
  "HERB", "HERD", "HERE", "HERO", "HID", "HIDE", "HIGH", "HIKE",
  "HILL", "HINGE", "HINT", "HIP", "HIRE", "HIS", "HIT", "HITCH",
  "HIVE", "HOARD", "HOBBY", "HOG", "HOIST", "HOLD", "HOLE", "HOLLY",
  "HOLY", "HOME", "HONEY", "HONOR", "HOOD", "HOOF", "HOOK", "HOP",
  "HOPE", "HORN", "HORSE", "HOSE", "HOST", "HOT", "HOTEL", "HOUND",
  "HOUR", "HOUSE", "HOVER", "HOW", "HUG", "HUGE", "HUM", "HUMAN",
  "HUMID", "HUMOR", "HUNT", "HURL", "HURRY", "HURT", "HUSH", "HUT",
  "ICE", "ICON", "IDEA", "IDEAL", "IDLE", "IDOL", "IMAGE", "IMPLY",
  "INCH", "INDEX", "INK", "INN", "INNER", "INPUT", "INTO", "IRIS",
  "IRON", "IRONY", "ISLE", "ISSUE", "ITCH", "ITEM", "IVORY", "IVY",
  "JAB", "JACK", "JADE", "JAIL", "JAM", "JAR", "JAW", "JAZZ",
  "JEANS", "JELLY", "JET", "JEWEL", "JOB", "JOG", "JOIN", "JOINT",
  "JOKE", "JOLLY", "JOLT", "JOY", "JUDGE", "JUICE", "JUICY", "JUMP",
  "JUNE", "JURY", "JUST", "KEEN", "KEEP", "KEPT", "KEY", "KICK",
  "KID", "KIN", "KIND", "KING", "KIT", "KITE", "KNEE", "KNEEL",
  "KNEW", "KNIFE", "KNIT", "KNOB", "KNOCK", "KNOT", "KNOW", "KNOWN",
  "LAB", "LABEL", "LABOR", "LACE", "LACK", "LAD", "LADDER", "LAID",
  "LAKE", "LAMB", "LAMP", "LAND", "LANE", "LAP", "LAPSE", "LARGE",
  "LASER", "LAST", "LATCH", "LATE", "LATER", "LAUGH", "LAVA", "LAW",
  "LAWN", "LAY", "LAYER", "LAZY", "LEAD", "LEAF", "LEAK", "LEAN",
  "LEAP", "LEARN", "LEASE", "LEASH", "LEAST", "LEAVE", "LED", "LEDGE",
  "LEFT", "LEG", "LEGAL", "LEMON", "LEND", "LENS", "LENT", "LESS",
  "LET", "LEVEL", "LEVER", "LID", "LIE", "LIFE", "LIFT", "LIGHT",
  "LIKE", "LILY", "LIMB", "LIME", "LIMIT", "LIMP", "LINE", "LINEN",
  "LINK", "LION", "LIP", "LIST", "LIT", "LITER", "LIVE", "LIVER",
  "LOAD", "LOAF", "LOAN", "LOBBY", "LOCAL", "LOCK", "LODGE", "LOFT",
  "LOG", "LOGIC", "LOGO", "LONE", "LONG", "LOOK", "LOOP", "LOOSE",
  "LORD", "LOSE", "LOSS", "LOST", "LOT", "LOUD", "LOVE", "LOW",
  "LOWER", "LOYAL", "LUCK", "LUCKY", "LUMP", "LUNAR", "LUNCH", "LUNG",
  "LURE", "LUSH", "MAD", "MADE", "MAGIC", "MAID", "MAIL", "MAIN",
  "MAJOR", "MAKE", "MALE", "MALL", "MAN", "MANGO", "MANY", "MAP",
  "MAPLE", "MARCH", "MARE", "MARK", "MARSH", "MASK", "MASS", "MAST",
  "MAT", "MATCH", "MATE", "MATH", "MAY", "MAYBE", "MAYOR", "MEAL",
  "MEAN", "MEANT", "MEAT", "MEDAL", "MEDIA", "MEET", "MELT", "MEN",
  "MEND", "MENU", "MERCY", "MERE", "MERGE", "MERIT", "MERRY", "MESH",
  "MESS", "MET", "METAL", "METER", "MICE", "MIGHT", "MILD", "MILE",
  "MILK", "MILL", "MIND", "MINE", "MINOR", "MINT", "MINUS", "MIST",
  "MIX", "MIXED", "MOAN", "MOAT", "MODE", "MODEL", "MOIST", "MOLD",
  "MOM", "MONEY", "MONTH", "MOOD", "MOON", "MOOSE", "MOP", "MORAL",
  "MORE", "MOSS", "MOST", "MOTEL", "MOTH", "MOTOR", "MOUND", "MOUNT",
  "MOUSE", "MOUTH", "MOVE", "MOVIE", "MOW", "MUCH", "MUD", "MUG",
  "MULE", "MUSE", "MUSIC", "MUST", "MUTE", "MYTH", "NAIL", "NAME",
  "NAP", "NASTY", "NAVY", "NEAR", "NEAT", "NECK", "NEED", "NERVE",
  "NEST", "NET", "NEVER", "NEW", "NEWS", "NEXT", "NICE", "NIECE",
  "NIGHT", "NINE", "NOBLE", "NOD", "NODE", "NOISE", "NONE", "NOON",
  "NOR", "NORTH", "NOSE", "NOT", "NOTE", "NOUN", "NOVEL", "NOW",
  "NURSE", "NUT", "OAK", "OAR", "OASIS", "OAT", "OATH", "OBEY",
  "OCCUR", "OCEAN", "ODD", "ODDS", "ODOR", "OFF", "OFFER", "OFTEN",
  "OIL", "OLD", "OLIVE", "OMIT", "ONCE", "ONE", "ONION", "ONLY",
  "ONTO", "OPEN", "OPERA", "OPT", "ORBIT", "ORDER", "ORGAN", "OTHER",
  "OTTER", "OUNCE", "OUR", "OUT", "OUTER", "OVAL", "OVEN", "OVER",
  "OWE", "OWL", "OWN", "OWNER", "OXYGEN", "PACE", "PACK", "PACT",
  "PAD", "PAGE", "PAID", "PAIL", "PAIN", "PAINT", "PAIR", "PALE",
  "PALM", "PAN", "PANEL", "PANIC", "PANT", "PAPER", "PARK", "PART",
  "PARTY", "PASS", "PAST", "PASTA", "PASTE", "PAT", "PATCH", "PATH",
  "PATIO", "PAUSE", "PAVE", "PAW", "PAY", "PEA", "PEACE", "PEACH",
  "PEAK", "PEAR", "PEARL", "PEDAL", "PEEL", "PEER", "PEN", "PENNY",
  "PER", "PERCH", "PERIL", "PET", "PETAL", "PHASE", "PHONE", "PHOTO",
  "PIANO", "PICK", "PIE", "PIECE", "PIER", "PIG", "PILE", "PILL",
  "PILOT", "PIN", "PINCH", "PINE", "PINK", "PINT", "PIPE", "PIT",
  "PITCH", "PITY", "PIVOT", "PIXEL", "PIZZA", "PLACE", "PLAIN", "PLAN",
  "PLANE", "PLANT", "PLATE", "PLAY", "PLAZA", "PLEA", "PLEAD", "PLOT",
  "PLOW", "PLUCK", "PLUG", "PLUM", "PLUS", "POEM", "POET", "POINT",
  "POISE", "POKE", "POLAR", "POLE", "POND", "PONY", "POOL", "POOR",
  "POP", "PORCH", "PORE", "PORK", "PORT", "POSE", "POST", "POT",
  "POUCH", "POUND", "POUR", "POWER", "PRANK", "PRAY", "PRESS", "PRICE",
  "PRIDE", "PRIME", "PRINT", "PRIOR", "PRIZE", "PROBE", "PRONE", "PROOF",
  "PROP", "PROUD", "PROVE", "PROXY", "PRUNE", "PULL", "PULSE", "PUMP",
  "PUNCH", "PUPIL", "PUPPY", "PURE", "PURSE", "PUSH", "PUT", "QUACK",
  "QUAKE", "QUART", "QUEEN", "QUERY", "QUEST", "QUEUE", "QUICK", "QUIET",
  "QUILL", "QUILT", "QUIT", "QUITE", "QUOTA", "QUOTE", "RACE", "RACK",
  "RADAR", "RADIO", "RAFT", "RAGE", "RAID", "RAIL", "RAIN", "RAISE",
  "RAKE", "RALLY", "RAM", "RAMP", "RAN", "RANCH", "RANGE", "RANK",
  "RAPID", "RARE", "RASH", "RAT", "RATE", "RATIO", "RAVEN", "RAW",
  "RAY", "RAZOR", "REACH", "REACT", "READ", "READY", "REAL", "REALM",
  "REAP", "REAR", "REBEL", "RECUR", "RED", "REED", "REEF", "REEL",
  "REFER", "REIGN", "REIN", "RELAX", "RELAY", "RELIC", "REMIT", "RENT",
  "REPAY", "REPLY", "RESET", "RESIN", "REST", "RETRO", "REUSE", "RHYME",
  "RIB", "RICE", "RICH", "RID", "RIDE", "RIDGE", "RIFLE", "RIG",
  "RIGHT", "RIGID", "RIM", "RING", "RINSE", "RIOT", "RIPE", "RISE",
  "RISK", "RIVAL", "RIVER", "ROAD", "ROAM", "ROAR", "ROAST", "ROBE",
  "ROBIN", "ROBOT", "ROCK", "ROCKY", "ROD", "RODE", "ROGUE", "ROLE",
  "ROLL", "ROOF", "ROOM", "ROOST", "ROOT", "ROPE", "ROSE", "ROT",
  "ROTOR", "ROUGH", "ROUND", "ROUTE", "ROW", "ROYAL", "RUB", "RUBY",
  "RUDE", "RUG", "RUGBY", "RUIN", "RULE", "RULER", "RUN", "RURAL",
  "RUSH", "RUST", "SAD", "SADDLE", "SAFE", "SAGA", "SAGE", "SAID",
  "SAIL", "SAINT", "SAKE", "SALAD", "SALE", "SALT", "SAME", "SAND",
  "SANE", "SANG", "SAT", "SAUCE", "SAVE", "SAW", "SAY", "SCALE",
  "SCAN", "SCAR", "SCARE", "SCARF", "SCENE", "SCENT", "SCOPE", "SCORE",
  "SCOUT", "SCRAP", "SCREW", "SCRUB", "SEA", "SEAL", "SEAM", "SEAT",
  "SEDAN", "SEE", "SEED", "SEEK", "SEEM", "SEEN", "SEIZE", "SELL",
  "SEND", "SENSE", "SENT", "SERVE", "SET", "SETUP", "SEVEN", "SEW",
  "SHADE", "SHAFT", "SHAKE", "SHALL", "SHAME", "SHAPE", "SHARE", "SHARK",
  "SHARP", "SHAVE", "SHE", "SHED", "SHEEP", "SHEET", "SHELF", "SHELL",
  "SHIELD", "SHIFT", "SHINE", "SHINY", "SHIP", "SHIRT", "SHOCK", "SHOE",
  "SHONE", "SHOOK", "SHOOT", "SHOP", "SHORE", "SHORT", "SHOT", "SHOUT",
  "SHOVE", "SHOW", "SHOWN", "SHRUB", "SHRUG", "SHUT", "SHY", "SICK",
  "SIDE", "SIEGE", "SIGH", "SIGHT", "SIGN", "SILK", "SILLY", "SILO",
  "SIN", "SINCE", "SING", "SINK", "SIP", "SIREN", "SIT", "SITE",
  "SIX", "SIXTH", "SIZE", "SKATE", "SKI", "SKILL", "SKIN", "SKIP",
  "SKIRT", "SKULL", "SKY", "SLAB", "SLAM", "SLANT", "SLAP", "SLATE",
  "SLAVE", "SLED", "SLEEK", "SLEEP", "SLEET", "SLEPT", "SLICE", "SLIDE",
  "SLIM", "SLIME", "SLING", "SLIP", "SLOPE", "SLOT", "SLOW", "SLUMP",
  "SMALL", "SMART", "SMASH", "SMELL", "SMILE", "SMOKE", "SNACK", "SNAIL",
  "SNAKE", "SNAP", "SNARE", "SNEAK", "SNOW", "SOAK", "SOAP", "SOAR",
  "SOB", "SOCK", "SODA", "SOFA", "SOFT", "SOIL", "SOLAR", "SOLD",
  "SOLE", "SOLID", "SOLO", "SOLVE", "SOME", "SON", "SONG", "SOON",
  "SORE", "SORRY", "SORT", "SOUL", "SOUND", "SOUP", "SOUR", "SOUTH",
  "SOW", "SPACE", "SPADE", "SPAN", "SPARE", "SPARK", "SPEAK", "SPEAR",
  "SPEED", "SPELL", "SPEND", "SPENT", "SPICE", "SPICY", "SPIN", "SPINE",
  "SPITE", "SPLIT", "SPOIL", "SPOKE", "SPOON", "SPORT", "SPOT", "SPRAY",
  "SPUR", "SPY", "SQUAD", "STACK", "STAFF", "STAGE", "STAIN", "STAIR",
  "STAKE", "STALE", "STALL", "STAMP", "STAND", "STAR", "STARE", "START",
  "STATE", "STAY", "STEAK", "STEAL", "STEAM", "STEEL", "STEEP", "STEER",
  "STEM", "STEP", "STERN", "STEW", "STICK", "STIFF", "STILL", "STING",
  "STIR", "STOCK", "STOLE", "STONE", "STOOD", "STOOL", "STOOP", "STOP",
  "STORE", "STORK", "STORM", "STORY", "STOVE", "STRAP", "STRAW", "STRAY",
  "STRIP", "STUCK", "STUDY", "STUFF", "STUMP", "STUNG", "STYLE", "SUCH",
  "SUDDEN", "SUE", "SUGAR", "SUIT", "SUITE", "SUM", "SUN", "SUNNY",
  "SUPER", "SURE", "SURF", "SURGE", "SWAMP", "SWAN", "SWAP", "SWARM",
  "SWAY", "SWEAR", "SWEAT", "SWEEP", "SWEET", "SWELL", "SWEPT", "SWIFT",
  "SWIM", "SWING", "SWORD", "SWORE", "SYRUP", "TABLE", "TAIL", "TAKE",
  "TAKEN", "TALE", "TALK", "TALL", "TAME", "TAN", "TANK", "TAP",
  "TAPE", "TAR", "TARGET", "TART", "TASK", "TASTE", "TAUGHT", "TAX",
  "TAXI", "TEA", "TEACH", "TEAM", "TEAR", "TEASE", "TEETH", "TELL",
  "TEMPO", "TEN", "TEND", "TENSE", "TENT", "TENTH", "TERM", "TEST",
  "TEXT", "THAN", "THANK", "THAT", "THAW", "THE", "THEFT", "THEIR",
  "THEME", "THEN", "THERE", "THESE", "THICK", "THIEF", "THIGH", "THIN",
  "THING", "THINK", "THIRD", "THIS", "THORN", "THOSE", "THREE", "THREW",
  "THROW", "THUMB", "THUS", "TIDAL", "TIDE", "TIDY", "TIE", "TIGER",
  "TIGHT", "TILE", "TILL", "TILT", "TIME", "TIMER", "TIN", "TINY",
  "TIP", "TIRE", "TITLE", "TOAD", "TOAST", "TODAY", "TOE", "TOKEN",
  "TOLD", "TOLL", "TOMB", "TON", "TONE", "TOOK", "TOOL", "TOOTH",
  "TOP", "TOPIC", "TORCH", "TORE", "TORN", "TOSS", "TOTAL", "TOUCH",
  "TOUGH", "TOUR", "TOWEL", "TOWER", "TOWN", "TOY", "TRACE", "TRACK",
  "TRADE", "TRAIL", "TRAIN", "TRAIT", "TRAP", "TRASH", "TRAY", "TREAT",
  "TREE", "TREND", "TRIAL", "TRIBE", "TRICK", "TRIED", "TRIM", "TRIO",
  "TRIP", "TROOP", "TROUT", "TRUCE", "TRUCK", "TRUE", "TRULY", "TRUNK",
  "TRUST", "TRUTH", "TRY", "TUB", "TUBE", "TUNA", "TUNE", "TURF",
  "TURN", "TUTOR", "TWEED", "TWICE", "TWIG", "TWIN", "TWIST", "TWO",
  "TYPE", "UGLY", "ULTRA", "UNCLE", "UNDER", "UNDO", "UNION", "UNIT",
  "UNITE", "UNTIL", "UPON", "UPPER", "UPSET", "URBAN", "URGE", "USAGE",
  "USE", "USED", "USER", "USUAL", "UTTER", "VAGUE", "VAIN", "VALID",
  "VALUE", "VALVE", "VAN", "VAPOR", "VAST", "VAULT", "VEIL", "VEIN",
  "VENT", "VENUE", "VERB", "VERSE", "VERY", "VEST", "VETO", "VIA",
  "VICE", "VIDEO", "VIEW", "VIGOR", "VILLA", "VINE", "VINYL", "VIOLA",
  "VIRUS", "VISA", "VISIT", "VITAL", "VIVID", "VOCAL", "VOICE", "VOID",
  "VOTE", "VOTER", "VOW", "VOWEL", "WADE", "WAGE", "WAGON", "WAIST",
  "WAIT", "WAKE", "WALK", "WALL", "WAND", "WANT", "WAR", "WARD",
  "WARM", "WARN", "WARP", "WAS", "WASH", "WASP", "WASTE", "WATCH",
  "WATER", "WAVE", "WAX", "WAY", "WEAK", "WEALTH", "WEAR", "WEARY",
  "WEAVE", "WEB", "WEDGE", "WEED", "WEEK", "WEEP", "WEIGH", "WELL",
  "WENT", "WERE", "WEST", "WET", "WHALE", "WHARF", "WHAT", "WHEAT",
  "WHEEL", "WHEN", "WHERE", "WHICH", "WHILE", "WHIP", "WHIRL", "WHITE",
  "WHO", "WHOLE", "WHOM", "WHOSE", "WHY", "WIDE", "WIDOW", "WIDTH",
  "WIELD", "WIFE", "WILD", "WILL", "WILT", "WIN", "WIND", "WINDY",
  "WINE", "WING", "WINK", "WIPE", "WIRE", "WISE", "WISH", "WIT",
  "WITCH", "WITH", "WOKE", "WOLF", "WOMAN", "WOMEN", "WON", "WOOD",
  "WOOL", "WORD", "WORE", "WORK", "WORLD", "WORM", "WORN", "WORRY",
  "WORSE", "WORST", "WORTH", "WOULD", "WOUND", "WOVEN", "WRAP", "WRATH",
  "WRECK", "WRIST", "WRITE", "WRONG", "WROTE", "YACHT", "YARD", "YARN",
  "YAWN", "YEAR", "YEAST", "YELL", "YES", "YET", "YIELD", "YOGA",
  "YOKE", "YOLK", "YOU", "YOUNG", "YOUR", "YOUTH", "ZEAL", "ZEBRA",
  "ZERO", "ZEST", "ZINC", "ZONE", "ZOO", "ZOOM",
];

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn words_are_uppercase_letters_of_three_or_more() {
    for word in WORDS {
      assert!(word.len() >= 3, "{} too short", word);
      assert!(
        word.chars().all(|c| c.is_ascii_uppercase()),
        "{} not uppercase letters",
        word
      );
    }
  }

  #[test]
  fn no_duplicates() {
    let set: HashSet<&str> = WORDS.iter().copied().collect();
    assert_eq!(set.len(), WORDS.len());
  }
}
