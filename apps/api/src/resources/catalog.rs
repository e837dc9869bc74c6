use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningResource {
    pub title: &'static str,
    pub description: &'static str,
    pub rating: f32,
    pub image_url: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Channels,
    Websites,
    Practice,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 3] = [
        ResourceCategory::Channels,
        ResourceCategory::Websites,
        ResourceCategory::Practice,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceCategory::Channels => "channels",
            ResourceCategory::Websites => "websites",
            ResourceCategory::Practice => "practice",
        }
    }

    pub fn resources(self) -> &'static [LearningResource] {
        match self {
            ResourceCategory::Channels => CHANNELS,
            ResourceCategory::Websites => WEBSITES,
            ResourceCategory::Practice => PRACTICE,
        }
    }
}

impl FromStr for ResourceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown resource category '{s}'"))
    }
}

const fn resource(
    title: &'static str,
    description: &'static str,
    rating: f32,
    image_url: &'static str,
    link: &'static str,
) -> LearningResource {
    LearningResource {
        title,
        description,
        rating,
        image_url,
        link,
    }
}

/// YouTube channels.
pub const CHANNELS: &[LearningResource] = &[
    resource(
        "Apna College",
        "DSA + Web",
        4.8,
        "https://yt3.googleusercontent.com/ytc/APkrFKY7K4bQ=s176-c-k-c0x00ffffff-no-rj",
        "https://www.youtube.com/@ApnaCollegeOfficial",
    ),
    resource(
        "CodeWithHarry",
        "Web + Java",
        4.7,
        "https://yt3.googleusercontent.com/ytc/APkrFKbS=s176-c-k-c0x00ffffff-no-rj",
        "https://www.youtube.com/@CodeWithHarry",
    ),
    resource(
        "Kunal Kushwaha",
        "DSA + Career",
        4.9,
        "https://yt3.googleusercontent.com/ytc/APkrFKZ=s176-c-k-c0x00ffffff-no-rj",
        "https://www.youtube.com/@KunalKushwaha",
    ),
    resource(
        "FreeCodeCamp",
        "Full Stack",
        4.8,
        "https://upload.wikimedia.org/wikipedia/commons/3/39/FreeCodeCamp_logo.png",
        "https://www.youtube.com/@freecodecamp",
    ),
    resource(
        "Striver",
        "DSA Sheets",
        4.9,
        "https://avatars.githubusercontent.com/u/70623425?v=4",
        "https://www.youtube.com/@takeUforward",
    ),
    resource(
        "Java Brains",
        "Java Backend",
        4.6,
        "https://yt3.googleusercontent.com/ytc/APkrFKJ=s176-c-k-c0x00ffffff-no-rj",
        "https://www.youtube.com/@JavaBrainsChannel",
    ),
    resource(
        "Traversy Media",
        "Frontend & MERN",
        4.7,
        "https://yt3.googleusercontent.com/ytc/APkrFKT=s176-c-k-c0x00ffffff-no-rj",
        "https://www.youtube.com/@TraversyMedia",
    ),
    resource(
        "Telusko",
        "Java + CS",
        4.5,
        "https://yt3.googleusercontent.com/ytc/APkrFKX=s176-c-k-c0x00ffffff-no-rj",
        "https://www.youtube.com/@Telusko",
    ),
    resource(
        "Academind",
        "React & JS",
        4.6,
        "https://yt3.googleusercontent.com/ytc/APkrFKM=s176-c-k-c0x00ffffff-no-rj",
        "https://www.youtube.com/@academind",
    ),
    resource(
        "Coding Ninjas",
        "Placement Prep",
        4.4,
        "https://upload.wikimedia.org/wikipedia/commons/5/5e/Coding_Ninjas_logo.png",
        "https://www.youtube.com/@CodingNinjasIndia",
    ),
];

/// Learning and practice websites.
pub const WEBSITES: &[LearningResource] = &[
    resource(
        "GeeksforGeeks",
        "DSA & Core CS",
        4.6,
        "https://media.geeksforgeeks.org/wp-content/uploads/20210101144014/gfglogo.png",
        "https://www.geeksforgeeks.org",
    ),
    resource(
        "LeetCode",
        "Interview Coding",
        4.8,
        "https://upload.wikimedia.org/wikipedia/commons/1/19/LeetCode_logo_black.png",
        "https://leetcode.com",
    ),
    resource(
        "HackerRank",
        "Skill Tests",
        4.5,
        "https://upload.wikimedia.org/wikipedia/commons/6/65/HackerRank_logo.png",
        "https://hackerrank.com",
    ),
    resource(
        "Codeforces",
        "Competitive Coding",
        4.7,
        "https://codeforces.org/s/0/images/codeforces-sponsored-by-ton.png",
        "https://codeforces.com",
    ),
    resource(
        "MDN Docs",
        "Web Standards",
        4.7,
        "https://developer.mozilla.org/static/img/favicon144.png",
        "https://developer.mozilla.org",
    ),
    resource(
        "IndiaBix",
        "Aptitude, Reasoning & Verbal Prep",
        4.7,
        "https://www.indiabix.com/favicon.ico",
        "https://www.indiabix.com",
    ),
];

/// Interview preparation.
pub const PRACTICE: &[LearningResource] = &[
    resource(
        "Striver Sheet",
        "Top DSA Questions",
        4.9,
        "https://takeuforward.org/wp-content/uploads/2021/09/striver.png",
        "https://takeuforward.org/interviews/strivers-sde-sheet-top-coding-interview-problems/",
    ),
    resource(
        "Blind 75",
        "FAANG Questions",
        4.8,
        "https://leetcode.com/favicon.ico",
        "https://leetcode.com/discuss/general-discussion/460599/blind-75-leetcode-questions",
    ),
    resource(
        "Tech Interview Handbook",
        "System + Coding",
        4.8,
        "https://www.techinterviewhandbook.org/favicon.ico",
        "https://www.techinterviewhandbook.org",
    ),
    resource(
        "PrepInsta",
        "Aptitude + Placement Preparation",
        4.6,
        "https://prepinsta.com/favicon.ico",
        "https://prepinsta.com",
    ),
    resource(
        "FreshersNow",
        "Aptitude, Reasoning & Company Prep",
        4.5,
        "https://www.freshersnow.com/favicon.ico",
        "https://www.freshersnow.com",
    ),
    resource(
        "FacePrep",
        "Aptitude & Interview Readiness",
        4.4,
        "https://www.faceprep.in/favicon.ico",
        "https://www.faceprep.in",
    ),
];
