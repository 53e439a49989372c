mod firebase_tests;
